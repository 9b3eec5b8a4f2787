//! Achievements export
//!
//! Writes a user's achievements as CSV with the columns
//! `Achievement,Status,Travel Points`.

use crate::error::Result;
use crate::ledger::UserProgress;
use std::io::Write;

/// Write achievements CSV to any writer
pub fn write_achievements_csv<W: Write>(progress: &UserProgress, writer: W) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(["Achievement", "Status", "Travel Points"])?;

    let points = progress.travel_points.to_string();
    for (place, achieved) in &progress.achievements {
        let status = if *achieved { "Achieved" } else { "Not Achieved" };
        csv.write_record([place.as_str(), status, points.as_str()])?;
    }

    csv.flush()?;
    Ok(())
}

/// Render achievements CSV to a string
pub fn achievements_csv(progress: &UserProgress) -> Result<String> {
    let mut buf = Vec::new();
    write_achievements_csv(progress, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_progress() {
        let csv = achievements_csv(&UserProgress::default()).unwrap();
        assert_eq!(csv, "Achievement,Status,Travel Points\n");
    }

    #[test]
    fn test_achievements_rows() {
        let mut progress = UserProgress::default();
        progress.apply_credit("Munnar", 20).unwrap();
        progress.apply_credit("My Home", 20).unwrap();
        progress.achievements.insert("Wayanad".to_string(), false);

        let csv = achievements_csv(&progress).unwrap();
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(
            lines,
            [
                "Achievement,Status,Travel Points",
                "Munnar,Achieved,40",
                "My Home,Achieved,40",
                "Wayanad,Not Achieved,40",
            ]
        );
    }
}
