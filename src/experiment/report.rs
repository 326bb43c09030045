//! Result aggregation and output.

use std::fs;
use std::io::Write;
use std::path::Path;

/// Mean outcome of one algorithm/relation pairing.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellSummary {
    /// Algorithm label.
    pub algorithm: String,
    /// Relation label.
    pub relation: String,
    /// Mean best cut value over the instance set.
    pub mean_cost: f64,
    /// Number of instances aggregated.
    pub instances: usize,
}

/// Aggregated outcome of one experiment.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExperimentReport {
    /// Experiment display name.
    pub name: String,
    /// One cell per algorithm/relation pairing, in grid order.
    pub cells: Vec<CellSummary>,
}

impl ExperimentReport {
    /// Renders the console block: one section per algorithm with the
    /// mean cut value per relation.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("=================================\n");
        out.push_str(&self.name);
        out.push('\n');
        let mut current_algorithm: Option<&str> = None;
        for cell in &self.cells {
            if current_algorithm != Some(cell.algorithm.as_str()) {
                out.push_str("=================================\n");
                out.push_str(&format!("Algorithm {}:\n", cell.algorithm));
                current_algorithm = Some(cell.algorithm.as_str());
            }
            out.push_str(&format!(
                "  mean cost ({}): {:.6} over {} instances\n",
                cell.relation, cell.mean_cost, cell.instances
            ));
        }
        out
    }

    /// Writes one `<algorithm>.csv` per algorithm into `dir` with a
    /// `relation,mean_cost` row per cell. An existing directory is
    /// replaced.
    pub fn write_csv(&self, dir: &Path) -> std::io::Result<()> {
        if dir.exists() {
            fs::remove_dir_all(dir)?;
        }
        fs::create_dir_all(dir)?;

        let mut algorithms: Vec<&str> = Vec::new();
        for cell in &self.cells {
            if !algorithms.contains(&cell.algorithm.as_str()) {
                algorithms.push(&cell.algorithm);
            }
        }

        for algorithm in algorithms {
            let mut file = fs::File::create(dir.join(format!("{algorithm}.csv")))?;
            for cell in self.cells.iter().filter(|cell| cell.algorithm == algorithm) {
                writeln!(file, "{},{}", cell.relation, cell.mean_cost)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> ExperimentReport {
        ExperimentReport {
            name: "maximum-cut n=6".into(),
            cells: vec![
                CellSummary {
                    algorithm: "gradient_ascent".into(),
                    relation: "single_flip".into(),
                    mean_cost: 1.25,
                    instances: 10,
                },
                CellSummary {
                    algorithm: "gradient_ascent".into(),
                    relation: "kflip_2".into(),
                    mean_cost: 1.5,
                    instances: 10,
                },
                CellSummary {
                    algorithm: "tabu_search".into(),
                    relation: "single_flip".into(),
                    mean_cost: 1.75,
                    instances: 10,
                },
            ],
        }
    }

    #[test]
    fn test_render_groups_by_algorithm() {
        let rendered = sample_report().render();
        assert!(rendered.contains("maximum-cut n=6"));
        assert!(rendered.contains("Algorithm gradient_ascent:"));
        assert!(rendered.contains("Algorithm tabu_search:"));
        assert!(rendered.contains("mean cost (kflip_2): 1.500000"));
        let ascent_at = rendered.find("Algorithm gradient_ascent").unwrap();
        let tabu_at = rendered.find("Algorithm tabu_search").unwrap();
        assert!(ascent_at < tabu_at, "grid order must be preserved");
    }

    #[test]
    fn test_write_csv_one_file_per_algorithm() {
        let dir = std::env::temp_dir().join(format!(
            "u_maxcut_report_{}_{}",
            std::process::id(),
            line!()
        ));
        let report = sample_report();
        report.write_csv(&dir).unwrap();

        let ascent = fs::read_to_string(dir.join("gradient_ascent.csv")).unwrap();
        assert_eq!(ascent, "single_flip,1.25\nkflip_2,1.5\n");
        let tabu = fs::read_to_string(dir.join("tabu_search.csv")).unwrap();
        assert_eq!(tabu, "single_flip,1.75\n");

        // Rewriting replaces the directory instead of appending.
        report.write_csv(&dir).unwrap();
        assert_eq!(fs::read_dir(&dir).unwrap().count(), 2);

        fs::remove_dir_all(&dir).unwrap();
    }
}
