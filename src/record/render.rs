use std::fmt;

use super::model::AudioRecord;

/// Multi-line `Field: value` dump of every field, in a fixed order.
pub fn render(record: &AudioRecord) -> String {
    let lines = [
        format!("Filepath: {}", record.filepath().display()),
        format!("Hash: {}", record.hash()),
        format!("Type: {}", record.kind().label()),
        format!("Title: {}", record.title()),
        format!("Artist: {}", record.artist()),
        format!("Album: {}", record.album()),
        format!("Year: {}", record.year()),
        format!("Length: {} s", record.length()),
        format!("Channels: {}", record.channels()),
        format!("Sample Rate: {}", record.sample_rate()),
        format!("Bitrate: {}", record.bitrate()),
        format!("Extension: {}", record.ext()),
        format!("Genre: {}", record.genre().label()),
        format!(
            "Listened: {}",
            if record.listened() { "True" } else { "False" }
        ),
        format!("Position: {}", record.position()),
    ];
    lines.join("\n")
}

impl fmt::Display for AudioRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self))
    }
}
