/// Parsed command line. Set minimums are `Some(None)` when the set is disabled with `-`.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub clipboard: bool,
    pub saved: bool,
    pub save: bool,
    pub no_special: bool,
    pub hex: bool,
    pub entropy: bool,
    pub length: Option<usize>,
    pub min: Option<usize>,
    pub max: Option<usize>,
    pub number: Option<usize>,
    pub lower: Option<Option<usize>>,
    pub upper: Option<Option<usize>>,
    pub digits: Option<Option<usize>>,
    pub special: Option<Option<usize>>,
    pub symbols: Option<String>,
}
