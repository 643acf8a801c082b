//! Render command - turns a JSON figure description into markup.

use std::{fs, io};

use tikzplot::{Document, DocumentSettings, Node};

use crate::cli::RenderArgs;
use crate::input::FigureInput;

/// Reads the input, builds the figure and returns the markup to emit.
pub fn render(args: &RenderArgs) -> Result<String, Box<dyn std::error::Error>> {
    let source = fs::read_to_string(&args.input)?;
    let input: FigureInput = serde_json::from_str(&source)?;
    let figure = input.build()?;

    let markup = if args.standalone {
        let mut settings = DocumentSettings::default();
        if let Some(class) = &args.class {
            settings = settings.with_class(class);
        }
        if let Some(compat) = &args.compat {
            settings = settings.with_compat(compat);
        }
        Document::with_settings(figure, settings).to_markup()?
    } else {
        if args.class.is_some() || args.compat.is_some() {
            tracing::warn!("--class and --compat only apply with --standalone");
        }
        figure.to_markup()?
    };
    Ok(markup)
}

/// Run the render command
pub fn run(args: &RenderArgs) -> Result<(), Box<dyn std::error::Error>> {
    let markup = render(args)?;
    match &args.output {
        Some(path) => {
            fs::write(path, &markup)?;
            tracing::info!(path = %path.display(), bytes = markup.len(), "Wrote markup");
        }
        None => {
            use io::Write;
            let mut stdout = io::stdout().lock();
            stdout.write_all(markup.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
