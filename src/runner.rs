use crate::config::RunnerConfig;
use crate::error::Result;
use crate::generator::CorpusGenerator;
use crate::persist::Persister;

/// Totals for one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub files_written: usize,
    pub bytes_written: u64,
    /// Number of section counts visited
    pub section_counts: usize,
}

/// Drives the generator across section counts and feeds a persister
///
/// The per-count cap lives here, not in the enumerator: for each count the
/// runner pulls at most `files_per_section_count` files and then drops the
/// traversal.
pub struct Runner {
    config: RunnerConfig,
}

impl Runner {
    pub fn new(config: RunnerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    pub fn run<P: Persister>(
        &self,
        generator: &mut CorpusGenerator,
        persister: &mut P,
    ) -> Result<RunSummary> {
        let mut summary = RunSummary::default();
        let cap = self.config.files_per_section_count;

        for count in self.config.section_counts() {
            tracing::info!("generating for {} sections", count);
            summary.section_counts += 1;

            if cap == 0 {
                continue;
            }

            for (index, file) in generator.generate_all(count)?.take(cap).enumerate() {
                let file = file?;
                persister.persist(&file, count, index)?;
                summary.files_written += 1;
                summary.bytes_written += file.len() as u64;
            }
        }

        persister.finish()?;

        tracing::info!(
            files = summary.files_written,
            bytes = summary.bytes_written,
            section_counts = summary.section_counts,
            "corpus generation complete"
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persist::MemoryPersister;

    fn config(min: u8, max: u8, cap: usize) -> RunnerConfig {
        RunnerConfig {
            min_section_count: min,
            max_section_count: max,
            files_per_section_count: cap,
            ..RunnerConfig::default()
        }
    }

    #[test]
    fn test_cap_per_section_count() {
        let runner = Runner::new(config(0, 3, 10)).unwrap();
        let mut generator = CorpusGenerator::new();
        let mut persister = MemoryPersister::new();

        let summary = runner.run(&mut generator, &mut persister).unwrap();

        // Zero sections has a single file; every other count hits the cap
        assert_eq!(summary.files_written, 1 + 10 * 3);
        assert_eq!(summary.section_counts, 4);
        assert!(persister.is_finished());

        let files = persister.files();
        assert_eq!(files[0].section_count, 0);
        assert_eq!(files[1].section_count, 1);
        assert_eq!(files[1].index, 0);
        assert_eq!(files[10].index, 9);
        assert_eq!(files[11].section_count, 2);
    }

    #[test]
    fn test_zero_cap_pulls_nothing() {
        let runner = Runner::new(config(0, 5, 0)).unwrap();
        let mut generator = CorpusGenerator::new();
        let mut persister = MemoryPersister::new();

        let summary = runner.run(&mut generator, &mut persister).unwrap();
        assert_eq!(summary.files_written, 0);
        assert_eq!(summary.section_counts, 6);
        assert!(persister.files().is_empty());
    }

    #[test]
    fn test_bytes_written() {
        let runner = Runner::new(config(1, 1, 3)).unwrap();
        let mut generator = CorpusGenerator::new();
        let mut persister = MemoryPersister::new();

        let summary = runner.run(&mut generator, &mut persister).unwrap();
        // 7 + 8 + 8
        assert_eq!(summary.bytes_written, 23);
    }

    #[test]
    fn test_invalid_config_rejected() {
        assert!(Runner::new(config(3, 1, 10)).is_err());
    }
}
