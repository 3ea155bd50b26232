use clap::{Parser, ValueEnum};
use folio::{DisplayList, DocumentSource, PageFormat, RecordingBackend, ViewerConfig, ViewerError};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PageSize {
    A4,
    Letter,
    Legal,
}

impl From<PageSize> for PageFormat {
    fn from(size: PageSize) -> Self {
        match size {
            PageSize::A4 => PageFormat::A4,
            PageSize::Letter => PageFormat::Letter,
            PageSize::Legal => PageFormat::Legal,
        }
    }
}

/// Render a JSON page document to PDF.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Document file: {"pages": [node, ...]}
    document: PathBuf,

    /// Output PDF path
    #[arg(short, long, default_value = folio::DEFAULT_EXPORT_FILE_NAME)]
    output: PathBuf,

    /// Zoom factor applied before export (minimum 0.1)
    #[arg(long, default_value_t = 1.0)]
    zoom: f32,

    #[arg(long, value_enum, default_value_t = PageSize::A4)]
    page_size: PageSize,

    /// Also write an SVG preview of the document
    #[arg(long)]
    preview: Option<PathBuf>,

    /// Print the draw calls instead of writing a PDF
    #[arg(long, default_value_t = false)]
    dry_run: bool,
}

fn main() -> Result<(), ViewerError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let config = ViewerConfig::default().with_page_format(args.page_size.into());
    let mut viewer = DocumentSource::from_path(&args.document)?.into_viewer(config);
    viewer.set_zoom(args.zoom);
    log::info!(
        "Loaded {} page(s) from {} at {}",
        viewer.page_count(),
        args.document.display(),
        viewer.zoom_label()
    );

    if let Some(preview) = &args.preview {
        fs::write(preview, DisplayList::build(&viewer).to_svg())?;
        log::info!("Wrote preview to {}", preview.display());
    }

    if args.dry_run {
        let mut backend = RecordingBackend::new();
        viewer.export_with(&mut backend)?;
        for call in backend.calls() {
            println!("{:?}", call);
        }
        return Ok(());
    }

    viewer.export_to_pdf(&args.output)?;
    Ok(())
}
