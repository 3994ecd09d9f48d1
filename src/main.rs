use clap::{Args, Parser, Subcommand};
use fluidclamp::config::Config;
use fluidclamp::engine::{CssProperty, Unit};
use fluidclamp::engine::formatter::{format_length, round};
use fluidclamp::session::{Field, MemoryClipboard, Session};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

#[derive(Parser)]
#[command(name = "fluidclamp")]
#[command(about = "Fluid CSS clamp() calculator and previewer", long_about = None)]
struct Cli {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct FormArgs {
    /// Config file (TOML) with default form values
    #[arg(short, long)]
    config: Option<String>,

    /// Viewport width (px) where scaling starts
    #[arg(long)]
    min_width: Option<String>,

    /// Viewport width (px) where scaling stops
    #[arg(long)]
    max_width: Option<String>,

    /// Value at the minimum width
    #[arg(long)]
    min_value: Option<String>,

    /// Value at the maximum width
    #[arg(long)]
    max_value: Option<String>,

    /// Unit of the values (px or rem)
    #[arg(short, long)]
    unit: Option<Unit>,

    /// Target property (font-size, width, height, padding, gap)
    #[arg(short, long)]
    property: Option<CssProperty>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the generated CSS declaration
    Calc {
        #[command(flatten)]
        form: FormArgs,

        /// Print the full result as JSON
        #[arg(long)]
        json: bool,

        /// Run the copy action and report its confirmation
        #[arg(long)]
        copy: bool,
    },

    /// Write an HTML preview of the declaration
    Preview {
        #[command(flatten)]
        form: FormArgs,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Only emit the preview frame document, without the host page
        #[arg(long)]
        document_only: bool,

        /// Height (px) reported for the preview frame
        #[arg(long, default_value_t = 320.0)]
        frame_height: f64,
    },

    /// Evaluate the clamped value at given viewport widths
    Probe {
        /// Viewport widths in px
        #[arg(required = true)]
        widths: Vec<f64>,

        #[command(flatten)]
        form: FormArgs,

        /// Height (px) reported for the preview frame
        #[arg(long, default_value_t = 320.0)]
        frame_height: f64,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let outcome = match cli.command {
        Commands::Calc { form, json, copy } => calc(&form, json, copy),
        Commands::Preview {
            form,
            output,
            document_only,
            frame_height,
        } => preview(&form, output.as_deref(), document_only, frame_height),
        Commands::Probe {
            widths,
            form,
            frame_height,
        } => probe(&form, &widths, frame_height),
    };

    if let Err(e) = outcome {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn build_session(form: &FormArgs) -> Result<Session, Box<dyn std::error::Error>> {
    let config = match &form.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::empty(),
    };
    let mut session = Session::new(&config);

    let overrides = [
        (Field::MinWidth, &form.min_width),
        (Field::MaxWidth, &form.max_width),
        (Field::MinValue, &form.min_value),
        (Field::MaxValue, &form.max_value),
    ];
    for (field, value) in overrides {
        if let Some(text) = value {
            session.set_field(field, text);
        }
    }
    if let Some(unit) = form.unit {
        session.set_unit(unit);
    }
    if let Some(property) = form.property {
        session.set_property(property);
    }
    session.blur_max_width();

    Ok(session)
}

fn now() -> Result<Duration, Box<dyn std::error::Error>> {
    Ok(SystemTime::now().duration_since(UNIX_EPOCH)?)
}

fn calc(form: &FormArgs, json: bool, copy: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = build_session(form)?;

    if json {
        let value = serde_json::json!({
            "request": session.request(),
            "output": session.output(),
            "result": session.result(),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("{}", session.output());
    }

    if copy {
        let mut clipboard = MemoryClipboard::default();
        let at = now()?;
        session.copy(&mut clipboard, at)?;
        eprintln!(
            "[{}] {}",
            session.copy_label(at),
            clipboard.contents.unwrap_or_default()
        );
    }

    Ok(())
}

fn preview(
    form: &FormArgs,
    output: Option<&str>,
    document_only: bool,
    frame_height: f64,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = build_session(form)?;

    if session.result().is_none() {
        log::warn!("Width range is invalid, preview shows the default element");
    }

    let frame_width = fluidclamp::engine::coerce_number(session.surface().frame_width());
    session.resize_preview(frame_width, frame_height);

    let html = if document_only {
        session.surface().render_document()
    } else {
        session.surface().render_host_page(session.output())
    };

    if let Some(output_path) = output {
        std::fs::write(output_path, html)?;
        println!("Preview written to {}", output_path);
    } else {
        println!("{}", html);
    }

    Ok(())
}

fn probe(
    form: &FormArgs,
    widths: &[f64],
    frame_height: f64,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = build_session(form)?;
    println!("{}", session.output());

    let result = fluidclamp::engine::calculate(&session.request())?;
    let unit = session.unit();

    println!("\nViewport samples ({}):", widths.len());
    for &width in widths {
        let px = result.value_at(width);
        session.resize_preview(width, frame_height);
        println!(
            "  - {} -> {} ({})  {}",
            format_length(width, "px"),
            format_length(round(px), "px"),
            format_length(round(unit.px_to_unit(px)), unit.as_str()),
            session.surface().info()
        );
    }

    Ok(())
}
