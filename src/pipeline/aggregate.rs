use crate::{
    error::{ConvertError, Result},
    types::{OutputDocument, PlaylistSummary, SongRecord, VideoId},
    utils,
};

/// Collects resolved playlists into the export document.
///
/// Playlists keep the input position they came from as `n`, so skipped
/// references leave gaps. Songs share one counter across all playlists,
/// starting at 1 and never reset.
#[derive(Debug, Default)]
pub struct Aggregator {
    playlists: Vec<PlaylistSummary>,
    songs: Vec<SongRecord>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one playlist and its songs. Returns the number of songs added.
    ///
    /// A playlist without videos is ignored entirely: it gets no summary and
    /// consumes no ordinal.
    pub fn add_playlist(
        &mut self,
        position: usize,
        playlist_id: &str,
        name: &str,
        video_ids: Vec<VideoId>,
    ) -> usize {
        if video_ids.is_empty() {
            return 0;
        }

        let added = video_ids.len();
        self.playlists.push(PlaylistSummary {
            id: playlist_id.to_string(),
            name: name.to_string(),
            n: position,
            song_count: added,
        });

        for id in video_ids {
            let n = self.songs.len() + 1;
            self.songs.push(SongRecord {
                id,
                timestamp: utils::iso_timestamp(),
                list: playlist_id.to_string(),
                n,
            });
        }
        added
    }

    pub fn song_count(&self) -> usize {
        self.songs.len()
    }

    pub fn playlist_count(&self) -> usize {
        self.playlists.len()
    }

    /// Materializes the document.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::Aggregate`] when no song was added; no partial
    /// document is produced in that case.
    pub fn finish(self, attempted: usize) -> Result<OutputDocument> {
        if self.songs.is_empty() {
            return Err(ConvertError::Aggregate { attempted });
        }

        Ok(OutputDocument {
            playlists: self.playlists,
            songs: self.songs,
        })
    }
}
