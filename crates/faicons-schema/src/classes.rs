use crate::options::{
    IconAnimation, IconFlip, IconPull, IconRotation, IconSize, IconStyle, StackLayerSize,
};
use std::fmt;

/// Appends `part` to `buf` unless it is absent or blank, separating with one space.
fn push_part(buf: &mut String, part: Option<&str>) {
    let Some(part) = part else {
        return;
    };
    if part.trim().is_empty() {
        return;
    }
    if !buf.is_empty() {
        buf.push(' ');
    }
    buf.push_str(part);
}

/// Join the non-blank parts with single spaces, preserving order.
pub fn join_classes<'a, I>(parts: I) -> String
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut buf = String::new();
    for part in parts {
        push_part(&mut buf, part);
    }
    buf
}

/// Fluent form of [`join_classes`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassBuilder {
    buf: String,
}

impl ClassBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn add<'a>(mut self, part: impl Into<Option<&'a str>>) -> Self {
        push_part(&mut self.buf, part.into());
        self
    }

    #[must_use]
    pub fn add_all<'a, I>(mut self, parts: I) -> Self
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        for part in parts {
            push_part(&mut self.buf, part);
        }
        self
    }

    #[must_use]
    pub fn add_if<'a>(self, condition: bool, part: impl Into<Option<&'a str>>) -> Self {
        if condition {
            self.add(part)
        } else {
            self
        }
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn build(self) -> String {
        self.buf
    }
}

impl fmt::Display for ClassBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buf)
    }
}

/// Class string for a full set of icon options, in parameter order.
pub fn build_classes(
    style: IconStyle,
    size: IconSize,
    animation: IconAnimation,
    rotation: IconRotation,
    flip: IconFlip,
    pull: IconPull,
    stack: StackLayerSize,
) -> String {
    join_classes([
        style.as_class(),
        size.as_class(),
        animation.as_class(),
        rotation.as_class(),
        flip.as_class(),
        pull.as_class(),
        stack.as_class(),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_skips_blank_parts() {
        let joined = join_classes([Some("a"), None, Some(""), Some("   "), Some("b")]);
        assert_eq!(joined, "a b");
    }

    #[test]
    fn join_of_nothing_is_empty() {
        assert_eq!(join_classes(Vec::<Option<&str>>::new()), "");
        assert_eq!(join_classes([None, Some("\t")]), "");
    }

    #[test]
    fn join_keeps_parts_verbatim() {
        assert_eq!(join_classes([Some("x"), Some("my-icon")]), "x my-icon");
    }

    #[test]
    fn builder_matches_one_shot_join() {
        let inputs: Vec<Vec<Option<&str>>> = vec![
            vec![],
            vec![None, None],
            vec![Some("fa-solid"), None, Some("fa-lg")],
            vec![Some(" "), Some("fa-spin"), Some(""), Some("custom")],
            vec![Some("a"), Some("b"), Some("c")],
        ];
        for parts in inputs {
            let fluent = parts
                .iter()
                .fold(ClassBuilder::new(), |b, p| b.add(*p))
                .build();
            let batched = ClassBuilder::new().add_all(parts.iter().copied()).build();
            let one_shot = join_classes(parts.iter().copied());
            assert_eq!(fluent, one_shot, "parts: {parts:?}");
            assert_eq!(batched, one_shot, "parts: {parts:?}");
        }
    }

    #[test]
    fn builder_add_if_respects_condition() {
        let classes = ClassBuilder::new()
            .add("fa-solid")
            .add_if(false, "fa-spin")
            .add_if(true, "fa-lg")
            .build();
        assert_eq!(classes, "fa-solid fa-lg");
    }

    #[test]
    fn builder_display_matches_build() {
        let builder = ClassBuilder::new().add("one").add(Option::<&str>::None).add("two");
        assert_eq!(builder.to_string(), "one two");
        assert!(!builder.is_empty());
        assert_eq!(builder.build(), "one two");
    }

    #[test]
    fn build_classes_all_absent_is_empty() {
        let classes = build_classes(
            IconStyle::None,
            IconSize::None,
            IconAnimation::None,
            IconRotation::None,
            IconFlip::None,
            IconPull::None,
            StackLayerSize::None,
        );
        assert_eq!(classes, "");
    }

    #[test]
    fn build_classes_style_and_size() {
        let classes = build_classes(
            IconStyle::Solid,
            IconSize::Lg,
            IconAnimation::None,
            IconRotation::None,
            IconFlip::None,
            IconPull::None,
            StackLayerSize::None,
        );
        assert_eq!(classes, "fa-solid fa-lg");
    }

    #[test]
    fn build_classes_every_category() {
        let classes = build_classes(
            IconStyle::Duotone,
            IconSize::X3,
            IconAnimation::BeatFade,
            IconRotation::Rotate180,
            IconFlip::Both,
            IconPull::Right,
            StackLayerSize::OneX,
        );
        assert_eq!(
            classes,
            "fa-duotone fa-3x fa-beat-fade fa-rotate-180 fa-flip-both fa-pull-right fa-stack-1x"
        );
    }
}
