/// A stage in the processing of proofs.
///
/// This is useful to omit certain parts of proof processing.
/// Omitting one stage also omits all stages after it,
/// i.e. all stages greater than the stage.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    /// Parsing
    Parse,
    /// Validation of clauses
    Check,
}

impl core::str::FromStr for Stage {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "parse" => Ok(Self::Parse),
            "check" => Ok(Self::Check),
            _ => Err("unknown stage: ".to_owned() + s),
        }
    }
}

#[test]
fn from_str() {
    assert_eq!("parse".parse::<Stage>(), Ok(Stage::Parse));
    assert_eq!("check".parse::<Stage>(), Ok(Stage::Check));
    assert!("share".parse::<Stage>().is_err());
    assert!(Stage::Parse < Stage::Check);
}
