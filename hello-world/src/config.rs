use anyhow::anyhow;
use std::env::var;
use std::fmt;
use std::str::FromStr;

const VARIANT_VAR: &str = "HELLO_WORLD_VARIANT";

/// Which flavour of the hello world response the function returns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum Variant {
    /// Fixed message, envelope built in place.
    #[default]
    Plain,
    /// Fixed message plus the output of the shared `display_something` hook.
    Layer,
    /// Personal greeting for `?name=`, envelope built by `format_response`.
    Greeting,
}

impl FromStr for Variant {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" => Ok(Variant::Plain),
            "layer" => Ok(Variant::Layer),
            "greeting" => Ok(Variant::Greeting),
            other => Err(anyhow!(
                "Invalid {VARIANT_VAR} value '{other}', expected one of: plain, layer, greeting"
            )),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Variant::Plain => "plain",
            Variant::Layer => "layer",
            Variant::Greeting => "greeting",
        };
        f.write_str(name)
    }
}

pub(crate) struct Config {
    pub variant: Variant,
}

impl Config {
    /// Reads the configuration from the environment.
    /// An unset or blank `HELLO_WORLD_VARIANT` selects the plain variant.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_value(var(VARIANT_VAR).ok().as_deref())
    }

    fn from_value(value: Option<&str>) -> anyhow::Result<Self> {
        let variant = match value.map(str::trim) {
            None | Some("") => Variant::default(),
            Some(value) => value.parse()?,
        };

        Ok(Self { variant })
    }
}
