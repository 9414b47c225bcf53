use std::path::{Path, PathBuf};

use leptos::logging;

use crate::{
    render_page, DrawerId, ShowcaseConfig, ShowcaseError, ShowcaseState, DEFAULT_CONFIG_FILE,
};

/// Usage text printed by `--help`.
pub const USAGE: &str = "\
usage: semantic-ui-showcase [options]

options:
  --config <path>   read page settings from a TOML file (default: ./showcase.toml)
  --open <drawer>   render <drawer> opened; repeatable (menu, sort, flavor, toppings, modal)
  --pretty          indent the HTML output
  --state           print the initial state as JSON instead of HTML
  -h, --help        show this help";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Parsed command line.
pub struct Invocation {
    /// Explicit config file.
    pub config: Option<PathBuf>,
    /// Drawers rendered in the `opened` state.
    pub open: Vec<DrawerId>,
    /// Forces pretty HTML regardless of the config file.
    pub pretty: bool,
    /// Print the state snapshot instead of the page.
    pub dump_state: bool,
    /// Print usage and exit.
    pub help: bool,
}

impl Invocation {
    /// Parses arguments, excluding the program name.
    pub fn parse(args: impl IntoIterator<Item = String>) -> Result<Self, ShowcaseError> {
        let mut invocation = Self::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => {
                    let path = args
                        .next()
                        .ok_or_else(|| ShowcaseError::usage("--config requires a path"))?;
                    invocation.config = Some(PathBuf::from(path));
                }
                "--open" => {
                    let drawer = args
                        .next()
                        .ok_or_else(|| ShowcaseError::usage("--open requires a drawer name"))?;
                    invocation.open.push(drawer.parse()?);
                }
                "--pretty" => invocation.pretty = true,
                "--state" => invocation.dump_state = true,
                "-h" | "--help" => invocation.help = true,
                other => {
                    return Err(ShowcaseError::usage(format!("unknown argument `{other}`")));
                }
            }
        }
        Ok(invocation)
    }

    /// Resolves the page settings.
    ///
    /// An explicit `--config` must load. The implicit `showcase.toml` is
    /// optional; when it exists but cannot be loaded the defaults are used
    /// and a warning is logged.
    pub fn config(&self, working_dir: &Path) -> Result<ShowcaseConfig, ShowcaseError> {
        let mut config = match &self.config {
            Some(path) => ShowcaseConfig::load(path)?,
            None => {
                let path = working_dir.join(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    ShowcaseConfig::load(&path).unwrap_or_else(|err| {
                        logging::warn!("{err}; using default showcase settings");
                        ShowcaseConfig::default()
                    })
                } else {
                    ShowcaseConfig::default()
                }
            }
        };
        if self.pretty {
            config.html.pretty = true;
        }
        Ok(config)
    }

    /// Initial state with the requested drawers opened.
    pub fn state(&self) -> ShowcaseState {
        let mut state = ShowcaseState::default();
        for drawer in &self.open {
            state.open(*drawer);
        }
        state
    }

    /// Produces the program output.
    pub fn run(&self, working_dir: &Path) -> Result<String, ShowcaseError> {
        if self.help {
            return Ok(USAGE.to_string());
        }
        let config = self.config(working_dir)?;
        let state = self.state();
        if self.dump_state {
            return Ok(serde_json::to_string_pretty(&state)?);
        }
        Ok(render_page(&state, &config))
    }
}
