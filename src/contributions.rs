//! Contribution calendars: loading, resampling to the board and synthetic samples.
//!
//! A calendar is a grid of intensities in `0..=4`, one row per weekday and one
//! column per week.

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::game::{SeededRng, MAX_INTENSITY};

/// Rows in a calendar, one per weekday
pub const DAYS_PER_WEEK: usize = 7;

/// Relative odds of each intensity level in [`sample`], level 0 first
const LEVEL_WEIGHTS: [u32; 5] = [40, 25, 20, 10, 5];

#[derive(Deserialize)]
#[serde(untagged)]
enum CalendarFile {
    Bare(Vec<Vec<i64>>),
    Wrapped { contributions: Vec<Vec<i64>> },
}

#[derive(Serialize)]
struct WrappedCalendar<'a> {
    contributions: &'a [Vec<u8>],
}

/// Read a calendar from a JSON file.
///
/// Accepts either a bare 2-D array or an object with a `contributions` key.
pub fn load_json(path: impl AsRef<Path>) -> Result<Vec<Vec<u8>>> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read contributions from {:?}", path))?;
    let file: CalendarFile = serde_json::from_str(&raw).with_context(|| {
        format!(
            "{:?} must hold a 2-D array or an object with a 'contributions' key",
            path
        )
    })?;

    let rows = match file {
        CalendarFile::Bare(rows) | CalendarFile::Wrapped { contributions: rows } => rows,
    };
    if rows.is_empty() || rows[0].is_empty() {
        bail!("Contributions in {:?} are empty", path);
    }

    let width = rows[0].len();
    let mut grid = Vec::with_capacity(rows.len());
    for (y, row) in rows.iter().enumerate() {
        if row.len() != width {
            bail!("Row {} has {} values, expected {}", y, row.len(), width);
        }
        let mut levels = Vec::with_capacity(width);
        for (x, &value) in row.iter().enumerate() {
            match u8::try_from(value) {
                Ok(level) if level <= MAX_INTENSITY => levels.push(level),
                _ => bail!(
                    "Contribution at row {}, column {} must be within 0..={}, got {}",
                    y,
                    x,
                    MAX_INTENSITY,
                    value
                ),
            }
        }
        grid.push(levels);
    }
    Ok(grid)
}

/// Write a calendar as `{"contributions": [...]}`, creating parent directories
pub fn save_json(path: impl AsRef<Path>, grid: &[Vec<u8>]) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {:?}", parent))?;
    }
    let json = serde_json::to_string_pretty(&WrappedCalendar {
        contributions: grid,
    })
    .context("Failed to serialize contributions")?;
    std::fs::write(path, json).with_context(|| format!("Failed to write {:?}", path))?;
    Ok(())
}

/// Nearest-neighbor resample of `grid` to `width` x `height`.
///
/// An empty source gives a zero grid.
pub fn normalize(grid: &[Vec<u8>], width: usize, height: usize) -> Vec<Vec<u8>> {
    let src_height = grid.len();
    let src_width = grid.first().map_or(0, Vec::len);
    if src_height == 0 || src_width == 0 {
        return vec![vec![0; width]; height];
    }

    (0..height)
        .map(|y| {
            let src_y = (y * src_height / height).min(src_height - 1);
            let row = &grid[src_y];
            (0..width)
                .map(|x| {
                    let src_x = (x * src_width / width).min(src_width - 1);
                    row.get(src_x).copied().unwrap_or(0)
                })
                .collect()
        })
        .collect()
}

/// Synthetic 7 x `weeks` calendar, weighted toward quiet days
pub fn sample(weeks: usize, rng: &mut SeededRng) -> Vec<Vec<u8>> {
    (0..DAYS_PER_WEEK)
        .map(|_| {
            (0..weeks)
                .map(|_| rng.weighted_index(&LEVEL_WEIGHTS).unwrap_or(0) as u8)
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    fn write_temp(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", contents).unwrap();
        file
    }

    #[test]
    fn test_load_bare_array() {
        let file = write_temp("[[0, 1, 2], [3, 4, 0]]");
        let grid = load_json(file.path()).unwrap();
        assert_eq!(grid, vec![vec![0, 1, 2], vec![3, 4, 0]]);
    }

    #[test]
    fn test_load_wrapped_object() {
        let file = write_temp(r#"{"contributions": [[4, 4], [1, 0]]}"#);
        let grid = load_json(file.path()).unwrap();
        assert_eq!(grid, vec![vec![4, 4], vec![1, 0]]);
    }

    #[test]
    fn test_load_rejects_bad_data() {
        for contents in [
            "[]",
            "[[]]",
            "[[0, 1], [2]]",
            "[[0, 5]]",
            "[[0, -1]]",
            r#"{"weeks": [[0]]}"#,
            "\"not a grid\"",
        ] {
            let file = write_temp(contents);
            assert!(load_json(file.path()).is_err(), "accepted {}", contents);
        }
        assert!(load_json("/definitely/not/here.json").is_err());
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("calendar.json");
        let grid = vec![vec![0, 1, 2, 3], vec![4, 3, 2, 1]];

        save_json(&path, &grid).unwrap();
        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("contributions"));
        assert_eq!(load_json(&path).unwrap(), grid);
    }

    #[test]
    fn test_normalize_identity() {
        let grid = vec![vec![0, 1, 2], vec![3, 4, 0]];
        assert_eq!(normalize(&grid, 3, 2), grid);
    }

    #[test]
    fn test_normalize_upsamples_by_repetition() {
        let grid = vec![vec![1, 2], vec![3, 4]];
        assert_eq!(
            normalize(&grid, 4, 2),
            vec![vec![1, 1, 2, 2], vec![3, 3, 4, 4]]
        );
        assert_eq!(normalize(&grid, 2, 3), vec![vec![1, 2], vec![1, 2], vec![3, 4]]);
    }

    #[test]
    fn test_normalize_downsamples() {
        let grid = vec![(0..8).map(|x| (x % 5) as u8).collect::<Vec<u8>>()];
        // Columns 0, 2, 4, 6 of the source
        assert_eq!(normalize(&grid, 4, 1), vec![vec![0, 2, 4, 1]]);
    }

    #[test]
    fn test_normalize_empty_source() {
        assert_eq!(normalize(&[], 3, 2), vec![vec![0; 3]; 2]);
    }

    #[test]
    fn test_sample_shape_and_range() {
        let mut rng = SeededRng::new(7);
        let grid = sample(52, &mut rng);

        assert_eq!(grid.len(), DAYS_PER_WEEK);
        assert!(grid.iter().all(|row| row.len() == 52));
        assert!(grid.iter().flatten().all(|&level| level <= MAX_INTENSITY));
        // Quiet days dominate
        let zeros = grid.iter().flatten().filter(|&&level| level == 0).count();
        let busiest = grid.iter().flatten().filter(|&&level| level == 4).count();
        assert!(zeros > busiest);
    }

    #[test]
    fn test_sample_is_reproducible() {
        let first = sample(20, &mut SeededRng::new(3));
        let second = sample(20, &mut SeededRng::new(3));
        assert_eq!(first, second);
    }
}
