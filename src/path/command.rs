//! Tokenizer and parser for path descriptions (`M 10 10 L 20 20 Z`).
//!
//! Parsing is permissive: anything that cannot be turned into a well-formed
//! command is dropped and reported as a [`ParseWarning`] instead of failing
//! the whole path.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

static TOKEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?P<num>[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)|(?P<cmd>[A-Za-z])|(?P<junk>[^\s,A-Za-z0-9]+)",
    )
    .expect("token pattern is valid")
});

/// Drawing operation of a single path command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    MoveTo,
    LineTo,
    HorizontalLineTo,
    VerticalLineTo,
    CubicCurveTo,
    ClosePath,
}

impl CommandKind {
    /// Maps a command letter to its kind and whether it is relative.
    #[must_use]
    pub fn from_letter(letter: char) -> Option<(Self, bool)> {
        let kind = match letter.to_ascii_uppercase() {
            'M' => Self::MoveTo,
            'L' => Self::LineTo,
            'H' => Self::HorizontalLineTo,
            'V' => Self::VerticalLineTo,
            'C' => Self::CubicCurveTo,
            'Z' => Self::ClosePath,
            _ => return None,
        };
        Some((kind, letter.is_ascii_lowercase()))
    }

    #[must_use]
    pub const fn letter(self, relative: bool) -> char {
        let upper = match self {
            Self::MoveTo => 'M',
            Self::LineTo => 'L',
            Self::HorizontalLineTo => 'H',
            Self::VerticalLineTo => 'V',
            Self::CubicCurveTo => 'C',
            Self::ClosePath => 'Z',
        };
        if relative {
            upper.to_ascii_lowercase()
        } else {
            upper
        }
    }

    /// Number of operands consumed per emitted point (or curve segment).
    #[must_use]
    pub const fn operands_per_group(self) -> usize {
        match self {
            Self::MoveTo | Self::LineTo => 2,
            Self::HorizontalLineTo | Self::VerticalLineTo => 1,
            Self::CubicCurveTo => 6,
            Self::ClosePath => 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PathCommand {
    pub kind: CommandKind,
    pub relative: bool,
    pub operands: Vec<f64>,
}

impl PathCommand {
    #[must_use]
    pub const fn new(kind: CommandKind, relative: bool, operands: Vec<f64>) -> Self {
        Self {
            kind,
            relative,
            operands,
        }
    }

    #[must_use]
    pub const fn letter(&self) -> char {
        self.kind.letter(self.relative)
    }

    /// Iterates the operands in groups of [`CommandKind::operands_per_group`].
    pub fn groups(&self) -> std::slice::ChunksExact<'_, f64> {
        self.operands
            .chunks_exact(self.kind.operands_per_group().max(1))
    }
}

/// A non-fatal problem encountered while parsing a path description.
///
/// `offset` is the byte offset in the source string.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseWarning {
    /// A token that is neither a number nor a command letter.
    MalformedNumber { token: String, offset: usize },
    /// A letter that is not one of `M L H V C Z` (either case).
    UnsupportedCommand { letter: char, offset: usize },
    /// Numbers that appeared before the first command letter.
    OrphanOperands { count: usize, offset: usize },
    /// A command without a single complete operand group.
    MissingOperands { command: char, offset: usize },
    /// Trailing operands that do not fill a complete group.
    IncompleteOperands {
        command: char,
        dropped: usize,
        offset: usize,
    },
    /// Operands given to a command that takes none.
    UnexpectedOperands {
        command: char,
        count: usize,
        offset: usize,
    },
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedNumber { token, offset } => {
                write!(f, "malformed number `{token}` at offset {offset}")
            }
            Self::UnsupportedCommand { letter, offset } => {
                write!(f, "unsupported command `{letter}` at offset {offset}")
            }
            Self::OrphanOperands { count, offset } => {
                write!(f, "{count} operand(s) before first command at offset {offset}")
            }
            Self::MissingOperands { command, offset } => {
                write!(f, "command `{command}` at offset {offset} has no complete operands")
            }
            Self::IncompleteOperands {
                command,
                dropped,
                offset,
            } => write!(
                f,
                "command `{command}` at offset {offset}: dropped {dropped} trailing operand(s)"
            ),
            Self::UnexpectedOperands {
                command,
                count,
                offset,
            } => write!(
                f,
                "command `{command}` at offset {offset} takes no operands, ignored {count}"
            ),
        }
    }
}

/// Parsed commands plus everything that had to be dropped on the way.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedPath {
    pub commands: Vec<PathCommand>,
    pub warnings: Vec<ParseWarning>,
}

impl ParsedPath {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Command letter currently collecting operands.
struct Pending {
    kind: CommandKind,
    relative: bool,
    offset: usize,
    operands: Vec<f64>,
}

enum Collector {
    /// No command seen yet.
    Start { orphans: usize, offset: usize },
    Command(Pending),
    /// Inside an unsupported command; its operands are discarded.
    Skipping,
}

/// Parses a path description into commands in source order.
#[must_use]
pub fn parse_path(input: &str) -> ParsedPath {
    let mut parsed = ParsedPath::default();
    let mut collector = Collector::Start {
        orphans: 0,
        offset: 0,
    };

    for caps in TOKEN_PATTERN.captures_iter(input) {
        if let Some(num) = caps.name("num") {
            let value = match num.as_str().parse::<f64>() {
                Ok(value) if value.is_finite() => value,
                _ => {
                    parsed.warnings.push(ParseWarning::MalformedNumber {
                        token: num.as_str().to_owned(),
                        offset: num.start(),
                    });
                    continue;
                }
            };
            match &mut collector {
                Collector::Start { orphans, offset } => {
                    if *orphans == 0 {
                        *offset = num.start();
                    }
                    *orphans += 1;
                }
                Collector::Command(pending) => pending.operands.push(value),
                Collector::Skipping => {}
            }
        } else if let Some(cmd) = caps.name("cmd") {
            let letter = cmd.as_str().chars().next().unwrap_or_default();
            finish(std::mem::replace(&mut collector, Collector::Skipping), &mut parsed);
            collector = match CommandKind::from_letter(letter) {
                Some((kind, relative)) => Collector::Command(Pending {
                    kind,
                    relative,
                    offset: cmd.start(),
                    operands: Vec::new(),
                }),
                None => {
                    parsed.warnings.push(ParseWarning::UnsupportedCommand {
                        letter,
                        offset: cmd.start(),
                    });
                    Collector::Skipping
                }
            };
        } else if let Some(junk) = caps.name("junk") {
            parsed.warnings.push(ParseWarning::MalformedNumber {
                token: junk.as_str().to_owned(),
                offset: junk.start(),
            });
        }
    }
    finish(collector, &mut parsed);

    log::debug!(
        "parsed path: {} command(s), {} warning(s)",
        parsed.commands.len(),
        parsed.warnings.len()
    );
    parsed
}

fn finish(collector: Collector, parsed: &mut ParsedPath) {
    match collector {
        Collector::Start { orphans, offset } => {
            if orphans > 0 {
                parsed.warnings.push(ParseWarning::OrphanOperands {
                    count: orphans,
                    offset,
                });
            }
        }
        Collector::Command(pending) => finish_command(pending, parsed),
        Collector::Skipping => {}
    }
}

fn finish_command(pending: Pending, parsed: &mut ParsedPath) {
    let Pending {
        kind,
        relative,
        offset,
        mut operands,
    } = pending;
    let command = kind.letter(relative);

    if kind == CommandKind::ClosePath {
        if !operands.is_empty() {
            parsed.warnings.push(ParseWarning::UnexpectedOperands {
                command,
                count: operands.len(),
                offset,
            });
        }
        parsed
            .commands
            .push(PathCommand::new(kind, relative, Vec::new()));
        return;
    }

    let group = kind.operands_per_group();
    let dropped = operands.len() % group;
    operands.truncate(operands.len() - dropped);

    if operands.is_empty() {
        parsed
            .warnings
            .push(ParseWarning::MissingOperands { command, offset });
        return;
    }
    if dropped > 0 {
        parsed.warnings.push(ParseWarning::IncompleteOperands {
            command,
            dropped,
            offset,
        });
    }

    // Extra pairs after a move are implicit line-tos of the same sense.
    if kind == CommandKind::MoveTo && operands.len() > 2 {
        let rest = operands.split_off(2);
        parsed.commands.push(PathCommand::new(kind, relative, operands));
        parsed
            .commands
            .push(PathCommand::new(CommandKind::LineTo, relative, rest));
        return;
    }

    parsed.commands.push(PathCommand::new(kind, relative, operands));
}
