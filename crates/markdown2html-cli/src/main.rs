use anyhow::Result;
use markdown2html_config::Config;
use markdown2html_engine::{ConvertError, Markdown, Options, io};
use std::{env, ffi::OsString, path::Path, process};

const USAGE: &str = "Usage: markdown2html <input_file.md> <output_file.html>";

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let args: Vec<OsString> = env::args_os().collect();
    let [_, input, output] = args.as_slice() else {
        eprintln!("{USAGE}");
        process::exit(1);
    };

    let md = Markdown::new(&load_options());
    match io::convert_file(&md, Path::new(input), Path::new(output)) {
        Ok(()) => Ok(()),
        Err(e @ ConvertError::Missing(_)) => {
            eprintln!("{e}");
            process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}

/// Options from the config file, or defaults when it is absent or unusable.
fn load_options() -> Options {
    match Config::load() {
        Ok(Some(config)) => config.markdown,
        Ok(None) => Options::default(),
        Err(e) => {
            log::warn!("{e}; using default options");
            Options::default()
        }
    }
}
