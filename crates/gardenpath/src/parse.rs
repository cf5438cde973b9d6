use crate::{identifier::SEPARATOR, Error, Identifier, ResourceKind, Result};

/// How strictly identifiers are validated
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ParseMode {
    /// Kind is detected by segment count, plus a substring check for the kind marker
    /// anywhere in the token, so `seedling--x--y` decodes as a seed.
    Compatible,
    /// Kind marker must be the second segment, and no segment may be empty
    Strict,
}

impl Default for ParseMode {
    fn default() -> Self {
        Self::Compatible
    }
}

peg::parser! {
    grammar identifier_parser() for str {
        rule separator()
            = "--"
        rule segment() -> &'input str
            = $((!separator() [_])+)

        rule shoot() -> Identifier
            = landscape:segment() separator() "shoot" separator()
              project:segment() separator() name:segment() {
                Identifier::shoot(landscape, project, name)
            }
        rule seed() -> Identifier
            = landscape:segment() separator() "seed" separator() name:segment() {
                Identifier::seed(landscape, name)
            }

        pub rule identifier() -> Identifier
            = id:(shoot() / seed()) ![_] { id }
    }
}

/// Parse identifier in [`ParseMode::Compatible`] mode
pub fn parse(path: &str) -> Result<Identifier> {
    parse_with(path, ParseMode::Compatible)
}

pub fn parse_with(path: &str, mode: ParseMode) -> Result<Identifier> {
    match mode {
        ParseMode::Compatible => parse_compatible(path),
        ParseMode::Strict => identifier_parser::identifier(path)
            .map_err(|e| Error::Grammar(path.to_owned(), e)),
    }
}

fn parse_compatible(path: &str) -> Result<Identifier> {
    let split: Vec<&str> = path.split(SEPARATOR).collect();
    let kind = [ResourceKind::Shoot, ResourceKind::Seed]
        .iter()
        .copied()
        .find(|kind| kind.segments() == split.len())
        .ok_or_else(|| Error::Malformed(path.to_owned()))?;
    if !path.contains(kind.marker()) {
        return Err(Error::Malformed(path.to_owned()));
    }
    Ok(match kind {
        ResourceKind::Shoot => Identifier::shoot(split[0], split[2], split[3]),
        ResourceKind::Seed => Identifier::seed(split[0], split[2]),
    })
}
