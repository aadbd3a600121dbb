use crate::error::SourceError;
use crate::filter::ValuationFilter;
use engine::ValuationRecord;
use log::info;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

/// `sleeper_id,player,position,value`; extra columns are ignored.
#[derive(Debug, Deserialize)]
struct ValueRow {
    #[serde(default)]
    sleeper_id: String,
    player: String,
    position: String,
    value: f64,
}

/// Loads a custom valuation file in place of the valuation API.
pub struct ValuesCsvLoader;

impl ValuesCsvLoader {
    pub fn load(path: &Path) -> Result<Vec<ValuationRecord>, SourceError> {
        let file = std::fs::File::open(path).map_err(|e| SourceError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let records = Self::from_reader(file).map_err(|e| SourceError::Csv {
            path: path.to_path_buf(),
            source: e,
        })?;

        info!("loaded {} player values from {}", records.len(), path.display());

        Ok(records)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<ValuationRecord>, csv::Error> {
        let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

        let mut records = Vec::new();
        for row in reader.deserialize() {
            let row: ValueRow = row?;
            let id = row.sleeper_id.trim();

            records.push(ValuationRecord {
                player_id: (!id.is_empty()).then(|| id.to_string()),
                name: row.player,
                position: row.position,
                value: row.value,
            });
        }

        Ok(ValuationFilter::apply(records))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_rows_with_and_without_ids() {
        let data = "\
sleeper_id,player,position,value,team
4046,Patrick Mahomes,QB,6100,KC
,D.J. Moore,WR,4100.5,CHI
99,Some Kicker,K,300,DAL
";

        let records = ValuesCsvLoader::from_reader(data.as_bytes()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].player_id.as_deref(), Some("4046"));
        assert_eq!(records[1].player_id, None);
        assert_eq!(records[1].value, 4100.5);
    }

    #[test]
    fn bad_value_is_a_csv_error() {
        let data = "sleeper_id,player,position,value\n1,Someone,QB,lots\n";

        assert!(ValuesCsvLoader::from_reader(data.as_bytes()).is_err());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = ValuesCsvLoader::load(Path::new("/nonexistent/values.csv")).unwrap_err();

        assert!(matches!(err, SourceError::Io { .. }));
    }
}
