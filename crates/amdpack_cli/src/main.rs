mod args;
mod types;

use std::{
  fs,
  io::{self, Read, Write},
  path::Path,
  process::ExitCode,
  time::Instant,
};

use amdpack::{BuildError, ConvertOptions, Converter};
use ansi_term::Colour;
use anyhow::Context;
use args::{EnhanceArgs, InputArgs, OutputArgs};
use clap::Parser;
use log::LevelFilter;

#[derive(Parser)]
#[command(version, about = "Convert AMD bundles into self-contained code", long_about = None)]
struct Commands {
  #[clap(flatten)]
  input: InputArgs,

  #[clap(flatten)]
  output: OutputArgs,

  #[clap(flatten)]
  enhance: EnhanceArgs,
}

fn init_logger(verbose: bool) {
  let mut builder = env_logger::Builder::new();
  builder.filter_level(if verbose { LevelFilter::Debug } else { LevelFilter::Warn });
  // `RUST_LOG` still wins over `--verbose`.
  builder.parse_default_env();
  builder.init();
}

fn read_input(path: &Path) -> anyhow::Result<String> {
  if path == Path::new("-") {
    let mut code = String::new();
    io::stdin().read_to_string(&mut code).context("Failed to read bundle from stdin")?;
    Ok(code)
  } else {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
  }
}

fn load_options(input: &InputArgs, output: &OutputArgs) -> anyhow::Result<ConvertOptions> {
  let mut options = match &input.options {
    Some(path) => {
      let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read options from {}", path.display()))?;
      serde_json::from_str::<ConvertOptions>(&raw)
        .with_context(|| format!("Invalid options in {}", path.display()))?
    }
    None => ConvertOptions::default(),
  };

  if let Some(mode) = output.mode {
    options.mode = Some(mode.into());
  }
  if let Some(entries) = &output.entries {
    options.entries = Some(entries.clone());
  }

  Ok(options)
}

fn run(args: &Commands) -> Result<(), BuildError> {
  let options = load_options(&args.input, &args.output)?;
  let code = read_input(&args.input.input)?;

  let converter = Converter::new(options);
  log::debug!("Converting {} with {:?}", args.input.input.display(), converter.options());
  let output = converter.convert(&code)?;

  match &args.output.output {
    Some(path) => {
      fs::write(path, &output).with_context(|| format!("Failed to write {}", path.display()))?;
    }
    None => {
      let mut stdout = io::stdout().lock();
      stdout
        .write_all(output.as_bytes())
        .and_then(|()| stdout.write_all(b"\n"))
        .context("Failed to write to stdout")?;
    }
  }

  Ok(())
}

fn main() -> ExitCode {
  let args = Commands::parse();
  init_logger(args.enhance.verbose);

  let start = Instant::now();
  match run(&args) {
    Ok(()) => {
      // The converted code itself goes to stdout when there's no `--output`.
      if let (Some(path), false) = (&args.output.output, args.enhance.silent) {
        let elapsed = format!("{:.2} ms", start.elapsed().as_secs_f64() * 1000.0);
        println!(
          "{} Wrote {} in {}",
          Colour::Green.paint("✔"),
          Colour::Cyan.paint(path.display().to_string()),
          Colour::White.bold().paint(elapsed)
        );
      }
      ExitCode::SUCCESS
    }
    Err(errors) => {
      for error in &*errors {
        eprintln!("{} {:#}", Colour::Red.paint("Error:"), error);
      }
      ExitCode::FAILURE
    }
  }
}
