//! Enumerated icon options and the CSS class each one contributes.
//!
//! Every enum has a `None` variant that contributes no class. Parsing a name
//! never fails: anything unrecognized resolves to `None`.

use crate::classes::build_classes;
use std::fmt;

macro_rules! icon_option {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $key:literal => $class:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        pub enum $name {
            #[default]
            None,
            $($(#[$vmeta])* $variant,)+
        }

        impl $name {
            /// Every variant, `None` first.
            pub const ALL: &'static [$name] = &[$name::None, $($name::$variant),+];

            pub fn as_class(self) -> Option<&'static str> {
                match self {
                    $name::None => None,
                    $($name::$variant => Some($class),)+
                }
            }

            /// Short name used on the command line and in configuration.
            pub fn name(self) -> &'static str {
                match self {
                    $name::None => "none",
                    $($name::$variant => $key,)+
                }
            }

            /// Case-insensitive lookup by short name; unknown names yield `None`.
            pub fn from_name(name: &str) -> Self {
                let name = name.trim();
                $(
                    if name.eq_ignore_ascii_case($key) {
                        return $name::$variant;
                    }
                )+
                $name::None
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        impl From<&str> for $name {
            fn from(name: &str) -> Self {
                Self::from_name(name)
            }
        }
    };
}

icon_option!(
    /// Visual family of the glyph.
    IconStyle {
        Solid => "solid" => "fa-solid",
        Regular => "regular" => "fa-regular",
        Light => "light" => "fa-light",
        Thin => "thin" => "fa-thin",
        Duotone => "duotone" => "fa-duotone",
        Brands => "brands" => "fa-brands",
    }
);

icon_option!(
    /// Relative (`xs`, `sm`, `lg`) and literal (`1x`..`10x`) sizing.
    IconSize {
        Xs => "xs" => "fa-xs",
        Sm => "sm" => "fa-sm",
        Lg => "lg" => "fa-lg",
        X1 => "1x" => "fa-1x",
        X2 => "2x" => "fa-2x",
        X3 => "3x" => "fa-3x",
        X4 => "4x" => "fa-4x",
        X5 => "5x" => "fa-5x",
        X6 => "6x" => "fa-6x",
        X7 => "7x" => "fa-7x",
        X8 => "8x" => "fa-8x",
        X9 => "9x" => "fa-9x",
        X10 => "10x" => "fa-10x",
    }
);

icon_option!(
    IconAnimation {
        Spin => "spin" => "fa-spin",
        Pulse => "pulse" => "fa-pulse",
        Beat => "beat" => "fa-beat",
        Bounce => "bounce" => "fa-bounce",
        Fade => "fade" => "fa-fade",
        BeatFade => "beat-fade" => "fa-beat-fade",
        Shake => "shake" => "fa-shake",
        Flip => "flip" => "fa-flip",
    }
);

icon_option!(
    IconRotation {
        Rotate90 => "90" => "fa-rotate-90",
        Rotate180 => "180" => "fa-rotate-180",
        Rotate270 => "270" => "fa-rotate-270",
    }
);

icon_option!(
    IconFlip {
        Horizontal => "horizontal" => "fa-flip-horizontal",
        Vertical => "vertical" => "fa-flip-vertical",
        Both => "both" => "fa-flip-both",
    }
);

icon_option!(
    /// Float the icon against surrounding text.
    IconPull {
        Left => "left" => "fa-pull-left",
        Right => "right" => "fa-pull-right",
    }
);

icon_option!(
    /// Layer size inside an `fa-stack` container.
    StackLayerSize {
        OneX => "1x" => "fa-stack-1x",
        TwoX => "2x" => "fa-stack-2x",
    }
);

/// One value per option category. `Default` contributes no classes at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct IconOptions {
    pub style: IconStyle,
    pub size: IconSize,
    pub animation: IconAnimation,
    pub rotation: IconRotation,
    pub flip: IconFlip,
    pub pull: IconPull,
    pub stack: StackLayerSize,
}

impl IconOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_style(mut self, style: IconStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_size(mut self, size: IconSize) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub fn with_animation(mut self, animation: IconAnimation) -> Self {
        self.animation = animation;
        self
    }

    #[must_use]
    pub fn with_rotation(mut self, rotation: IconRotation) -> Self {
        self.rotation = rotation;
        self
    }

    #[must_use]
    pub fn with_flip(mut self, flip: IconFlip) -> Self {
        self.flip = flip;
        self
    }

    #[must_use]
    pub fn with_pull(mut self, pull: IconPull) -> Self {
        self.pull = pull;
        self
    }

    #[must_use]
    pub fn with_stack(mut self, stack: StackLayerSize) -> Self {
        self.stack = stack;
        self
    }

    /// Space-joined class string in declared field order.
    pub fn classes(&self) -> String {
        build_classes(
            self.style,
            self.size,
            self.animation,
            self.rotation,
            self.flip,
            self.pull,
            self.stack,
        )
    }
}
