use super::{json_pretty, EXIT_SUCCESS};
use faicons_schema::{
    normalize_icon_name, ClassBuilder, IconAnimation, IconFlip, IconOptions, IconPull,
    IconRotation, IconSize, IconStyle, StackLayerSize,
};

/// Raw option names as given on the command line.
#[derive(Debug, Default)]
pub struct ClassArgs<'a> {
    pub icon: Option<&'a str>,
    pub style: Option<&'a str>,
    pub size: Option<&'a str>,
    pub animation: Option<&'a str>,
    pub rotation: Option<&'a str>,
    pub flip: Option<&'a str>,
    pub pull: Option<&'a str>,
    pub stack: Option<&'a str>,
    pub extra: &'a [String],
}

impl ClassArgs<'_> {
    fn options(&self) -> IconOptions {
        IconOptions {
            style: self.style.map(IconStyle::from_name).unwrap_or_default(),
            size: self.size.map(IconSize::from_name).unwrap_or_default(),
            animation: self.animation.map(IconAnimation::from_name).unwrap_or_default(),
            rotation: self.rotation.map(IconRotation::from_name).unwrap_or_default(),
            flip: self.flip.map(IconFlip::from_name).unwrap_or_default(),
            pull: self.pull.map(IconPull::from_name).unwrap_or_default(),
            stack: self.stack.map(StackLayerSize::from_name).unwrap_or_default(),
        }
    }
}

/// Option classes first, then the normalized icon token, then extras.
pub fn compose(args: &ClassArgs<'_>) -> String {
    let icon = args.icon.map(normalize_icon_name);
    let options = args.options().classes();
    ClassBuilder::new()
        .add(options.as_str())
        .add(icon.as_deref())
        .add_all(args.extra.iter().map(|s| Some(s.as_str())))
        .build()
}

pub fn run(args: &ClassArgs<'_>, json: bool) -> Result<u8, String> {
    let classes = compose(args);
    if json {
        let payload = serde_json::json!({ "classes": classes });
        println!("{}", json_pretty(&payload)?);
    } else {
        println!("{classes}");
    }
    Ok(EXIT_SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_options_yield_empty_string() {
        assert_eq!(compose(&ClassArgs::default()), "");
    }

    #[test]
    fn options_icon_and_extras_are_ordered() {
        let extra = vec!["text-muted".to_owned(), "  ".to_owned()];
        let args = ClassArgs {
            icon: Some("ArrowRight"),
            style: Some("solid"),
            size: Some("LG"),
            extra: &extra,
            ..ClassArgs::default()
        };
        assert_eq!(compose(&args), "fa-solid fa-lg fa-arrow-right text-muted");
    }

    #[test]
    fn unknown_option_names_are_ignored() {
        let args = ClassArgs {
            style: Some("sharp"),
            rotation: Some("45"),
            animation: Some("spin"),
            ..ClassArgs::default()
        };
        assert_eq!(compose(&args), "fa-spin");
    }
}
