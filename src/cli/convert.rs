use std::{path::PathBuf, time::Duration};

use tabled::Table;
use tokio::io::AsyncReadExt;

use crate::{
    Res,
    config::Settings,
    error, info,
    pipeline::{InputMode, Pipeline},
    success,
    types::{OutputDocument, PlaylistTableRow},
};

/// Options of the `convert` command after argument parsing.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    pub references: Vec<String>,
    pub input: Option<PathBuf>,
    pub mode: InputMode,
    pub output: Option<PathBuf>,
    pub relays: Vec<String>,
    pub search_delay_ms: Option<u64>,
    pub no_progress: bool,
}

pub async fn convert(mut settings: Settings, options: ConvertOptions) {
    if !options.relays.is_empty() {
        settings.relays = options.relays.clone();
    }
    if let Some(ms) = options.search_delay_ms {
        settings.search_delay = Duration::from_millis(ms);
    }
    if options.no_progress {
        settings.show_progress = false;
    }

    let input = match read_input(&options).await {
        Ok(input) => input,
        Err(e) => error!("Cannot read input: {}", e),
    };

    let pipeline = match Pipeline::new(settings) {
        Ok(pipeline) => pipeline,
        Err(e) => error!("Cannot set up HTTP client: {}", e),
    };

    let document = match pipeline.run(&input, options.mode).await {
        Ok(document) => document,
        Err(e) => error!("{}", e),
    };

    if let Err(e) = write_output(&document, options.output.as_ref()).await {
        error!("Cannot write output: {}", e);
    }

    print_summary(&document);
    success!(
        "Converted {} songs from {} playlists to Piped Music format",
        document.songs.len(),
        document.playlists.len()
    );
}

async fn read_input(options: &ConvertOptions) -> Res<String> {
    if !options.references.is_empty() {
        return Ok(options.references.join("\n"));
    }

    match &options.input {
        Some(path) if path.as_os_str() != "-" => Ok(async_fs::read_to_string(path).await?),
        _ => {
            info!("Reading playlist references from stdin");
            let mut buffer = String::new();
            tokio::io::stdin().read_to_string(&mut buffer).await?;
            Ok(buffer)
        }
    }
}

async fn write_output(document: &OutputDocument, output: Option<&PathBuf>) -> Res<()> {
    let json = document.to_json()?;

    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                async_fs::create_dir_all(parent).await?;
            }
            async_fs::write(path, json).await?;
            info!("Document written to {}", path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}

fn print_summary(document: &OutputDocument) {
    let rows: Vec<PlaylistTableRow> = document
        .playlists
        .iter()
        .map(|p| PlaylistTableRow {
            n: p.n,
            name: p.name.clone(),
            id: p.id.clone(),
            songs: p.song_count,
        })
        .collect();

    eprintln!("{}", Table::new(rows));
}
