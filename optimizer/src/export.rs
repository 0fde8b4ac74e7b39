//! Lineup export
//!
//! CSV follows the browser download: a role table, a blank line, then the
//! totals. Numbers print the way a JSON client would show them (`58500`,
//! `58500.5`), the projected score with two decimals.

use std::path::{Path, PathBuf};

use shared::{process_debug, Lineup, Player, ProcessId};
use crate::error::{OptimizerError, OptimizerResult};

pub const CSV_HEADER: [&str; 4] = ["Role", "Name", "Salary", "Projection"];

/// Every lineup of a run in one file, next to the per-lineup CSVs
pub const JSON_FILE_NAME: &str = "lineups.json";

/// One lineup as a standalone CSV document
pub fn lineup_to_csv(lineup: &Lineup) -> OptimizerResult<String> {
    let mut roles = csv::Writer::from_writer(Vec::new());
    roles.write_record(CSV_HEADER)?;
    write_player(&mut roles, "MVP", lineup.mvp())?;
    for player in lineup.utils() {
        write_player(&mut roles, "UTIL", player)?;
    }

    let mut totals = csv::Writer::from_writer(Vec::new());
    totals.write_record(["Total Salary".to_string(), lineup.total_salary().to_string()])?;
    totals.write_record(["Projected Score".to_string(), format!("{:.2}", lineup.projected_score())])?;

    let mut document = finish(roles)?;
    document.push('\n');
    document.push_str(&finish(totals)?);
    Ok(document)
}

/// Every lineup's CSV, separated by blank lines
pub fn lineups_to_csv(lineups: &[Lineup]) -> OptimizerResult<String> {
    let documents = lineups.iter().map(lineup_to_csv).collect::<OptimizerResult<Vec<_>>>()?;
    Ok(documents.join("\n"))
}

pub fn lineups_to_json(lineups: &[Lineup]) -> OptimizerResult<String> {
    Ok(serde_json::to_string_pretty(lineups)?)
}

/// Write `lineup_1.csv`, `lineup_2.csv`, ... and `lineups.json` into `dir`, returning the paths
pub fn write_lineup_files(dir: &Path, lineups: &[Lineup]) -> OptimizerResult<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)?;

    let mut paths = Vec::with_capacity(lineups.len() + 1);
    for (index, lineup) in lineups.iter().enumerate() {
        let path = dir.join(format!("lineup_{}.csv", index + 1));
        std::fs::write(&path, lineup_to_csv(lineup)?)?;
        paths.push(path);
    }

    let json_path = dir.join(JSON_FILE_NAME);
    std::fs::write(&json_path, lineups_to_json(lineups)?)?;
    paths.push(json_path);

    process_debug!(ProcessId::current(), "Wrote {} lineup files to {}", paths.len(), dir.display());
    Ok(paths)
}

fn write_player(writer: &mut csv::Writer<Vec<u8>>, role: &str, player: &Player) -> csv::Result<()> {
    writer.write_record([
        role.to_string(),
        player.name.clone(),
        player.salary.to_string(),
        player.projection.to_string(),
    ])
}

fn finish(writer: csv::Writer<Vec<u8>>) -> OptimizerResult<String> {
    let bytes = writer
        .into_inner()
        .map_err(|e| OptimizerError::IoError(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| OptimizerError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::PlayerId;

    fn player(id: &str, name: &str, salary: u32, projection: f64) -> Player {
        Player {
            id: PlayerId::new(id),
            name: name.to_string(),
            position: "G".to_string(),
            team: "BOS".to_string(),
            opponent: "MIA".to_string(),
            salary,
            projection,
        }
    }

    fn sample_lineup() -> Lineup {
        Lineup::new(
            player("1", "Jayson Tatum", 15001, 52.3),
            vec![
                player("2", "Jaylen Brown", 12000, 41.0),
                player("3", "Bam Adebayo", 10000, 38.25),
                player("4", "Derrick White", 8000, 29.5),
                player("5", "Tyler Herro", 7000, 27.0),
                player("6", "Sam Hauser", 4000, 15.5),
            ],
        )
    }

    #[test]
    fn test_csv_layout() {
        let csv = lineup_to_csv(&sample_lineup()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "Role,Name,Salary,Projection");
        assert_eq!(lines[1], "MVP,Jayson Tatum,15001,52.3");
        assert_eq!(lines[2], "UTIL,Jaylen Brown,12000,41");
        assert_eq!(lines[6], "UTIL,Sam Hauser,4000,15.5");
        assert_eq!(lines[7], "");
        // 1.5 * 15001 + 41000 = 63501.5
        assert_eq!(lines[8], "Total Salary,63501.5");
        assert_eq!(lines[9], "Projected Score,229.70");
        assert_eq!(lines.len(), 10);
    }

    #[test]
    fn test_names_with_commas_are_quoted() {
        let lineup = Lineup::new(
            player("1", "Jackson, Jr.", 5000, 10.0),
            (2..7).map(|i| player(&i.to_string(), "X", 5000, 1.0)).collect(),
        );
        let csv = lineup_to_csv(&lineup).unwrap();
        assert!(csv.contains("MVP,\"Jackson, Jr.\",5000,10"));
    }

    #[test]
    fn test_json_uses_wire_names() {
        let json = lineups_to_json(&[sample_lineup()]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value[0]["mvp"]["dfs_id"], "1");
        assert_eq!(value[0]["utils"].as_array().unwrap().len(), 5);
        assert_eq!(value[0]["total_salary"], 63501.5);
    }

    #[test]
    fn test_write_lineup_files() {
        let dir = tempfile::tempdir().unwrap();
        let paths = write_lineup_files(dir.path(), &[sample_lineup(), sample_lineup()]).unwrap();

        assert_eq!(paths.len(), 3);
        assert!(paths[1].ends_with("lineup_2.csv"));
        let contents = std::fs::read_to_string(&paths[0]).unwrap();
        assert!(contents.starts_with("Role,Name,Salary,Projection"));

        assert!(paths[2].ends_with(JSON_FILE_NAME));
        let json: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&paths[2]).unwrap()).unwrap();
        assert_eq!(json.as_array().unwrap().len(), 2);
    }
}
