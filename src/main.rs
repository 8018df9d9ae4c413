//! pagesmith's main application entry point.
//! Handles argument parsing, loads the template and its context,
//! and writes the rendered pages.

use std::path::Path;

use pagesmith::{
    cli::{get_args, Args},
    config::get_config,
    context::Context,
    engine::Engine,
    error::{default_error_handler, Error, Result},
    loader::{load_context, load_template, parse_assignment},
    processor::{get_output_dir, write_page, Processor},
};

/// Main application entry point.
fn main() {
    let args = get_args();

    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Trace
        } else {
            log::LevelFilter::Off
        })
        .init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Builds the render context: config defaults, then the context file, then `--set`.
fn build_context(args: &Args, defaults: Context) -> Result<Context> {
    let mut context = defaults;
    if let Some(path) = &args.context {
        context.extend(load_context(path)?);
    }
    for assignment in &args.assignments {
        let (key, value) = parse_assignment(assignment)?;
        context.set(key, value);
    }
    Ok(context)
}

/// Main application logic execution.
///
/// # Flow
/// 1. Loads the template and the configuration next to it
/// 2. Builds the context
/// 3. Renders one page, or one page per slice of the paginated collection
/// 4. Prints the single page or writes every page to the output directory
fn run(args: Args) -> Result<()> {
    let template = load_template(&args.template)?;
    let template_dir = args.template.parent().unwrap_or(Path::new("."));
    let config = args.merge_into(get_config(template_dir)?);

    let context = build_context(&args, config.default_context()?)?;
    let engine = Engine::with_options(config.render_options());
    let settings = config.page_settings();

    let Some(output_dir) = &args.output_dir else {
        if settings.collection.is_some() {
            return Err(Error::ConfigError(
                "paginated output requires an OUTPUT_DIR".to_string(),
            ));
        }
        let pages = Processor::new(&engine, &template, &context, &settings).process()?;
        for page in pages {
            print!("{}", page.content);
        }
        return Ok(());
    };

    let output_root = get_output_dir(output_dir, args.force)?;
    let pages = Processor::new(&engine, &template, &context, &settings).process()?;
    for page in &pages {
        let target = write_page(page, &output_root)?;
        println!("Rendered: '{}'", target.display());
    }

    println!("Rendered {} page(s) into {}.", pages.len(), output_root.display());
    Ok(())
}
