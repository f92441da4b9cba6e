use crate::error::CliError;
use clap::Parser;
use std::path::PathBuf;

/// Compile regular expressions into NFAs and test strings against them,
/// one at a time, in a batch, or by generating random test suites.
#[derive(Debug, Parser)]
#[command(name = "thompson", version, about)]
pub struct Args {
    /// The pattern to compile (regular mode).
    #[arg(short = 'r', long = "regex")]
    pub regex: Option<String>,

    /// A candidate string to test against --regex. May be repeated.
    #[arg(short = 's', long = "test-string")]
    pub test_string: Vec<String>,

    /// JSON batch input file (batch mode).
    #[arg(short = 'i', long = "input-file")]
    pub input_file: Option<PathBuf>,

    /// JSON batch output file (batch mode).
    #[arg(short = 'o', long = "output-file")]
    pub output_file: Option<PathBuf>,

    /// Generate N random patterns plus positive/negative test strings
    /// under a tests/ directory (test-generation mode).
    #[arg(short = 't', long = "generate-tests")]
    pub generate_tests: Option<usize>,

    /// Evaluate batch records and candidate strings concurrently.
    #[arg(long = "parallel")]
    pub parallel: bool,

    /// Raise log verbosity to debug.
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

/// The mode selected by a mutually-exclusive group of flags, resolved from
/// the raw [`Args`] (spec §6: "Modes are mutually exclusive; violating
/// that combination exits with a usage error").
pub enum Mode {
    Regular { regex: String, strings: Vec<String> },
    Batch { input: PathBuf, output: PathBuf },
    GenerateTests { count: usize },
}

impl Args {
    pub fn mode(&self) -> Result<Mode, CliError> {
        let wants_regular = self.regex.is_some() || !self.test_string.is_empty();
        let wants_batch = self.input_file.is_some() || self.output_file.is_some();
        let wants_testgen = self.generate_tests.is_some();

        match (wants_regular, wants_batch, wants_testgen) {
            (true, false, false) => {
                let regex = self
                    .regex
                    .clone()
                    .ok_or_else(|| CliError::Usage("--test-string requires --regex".into()))?;
                if self.test_string.is_empty() {
                    return Err(CliError::Usage(
                        "--regex requires at least one --test-string".into(),
                    ));
                }
                Ok(Mode::Regular {
                    regex,
                    strings: self.test_string.clone(),
                })
            }
            (false, true, false) => {
                let input = self.input_file.clone().ok_or_else(|| {
                    CliError::Usage("batch mode requires both --input-file and --output-file".into())
                })?;
                let output = self.output_file.clone().ok_or_else(|| {
                    CliError::Usage("batch mode requires both --input-file and --output-file".into())
                })?;
                Ok(Mode::Batch { input, output })
            }
            (false, false, true) => Ok(Mode::GenerateTests {
                count: self.generate_tests.expect("wants_testgen just checked Some"),
            }),
            (false, false, false) => Err(CliError::Usage(
                "one of --regex/--test-string, --input-file/--output-file, or --generate-tests is required".into(),
            )),
            _ => Err(CliError::Usage(
                "regular, batch, and test-generation modes are mutually exclusive".into(),
            )),
        }
    }
}
