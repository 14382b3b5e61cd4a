/// Manual command-line option parsing.
/// Classifies raw tokens, matches them against a declared option table and
/// binds values into typed slots, one linear pass with a one-token lookback.
use constants::OPTION_CHAR;
use std::path::Path;
use thiserror::Error;

/// Declared argument kind for one option entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgKind {
    /// Plain flag, no value token consumed.
    None,
    /// Consumes the next token, converted as i32.
    Int,
    /// Consumes the next token, converted as f32.
    Float,
    /// Consumes the next token, converted as f64.
    Double,
    /// Consumes the next token verbatim.
    Str,
    /// Collects the current token into the remains list.
    Remain,
}

impl ArgKind {
    /// True when matching this option consumes the following token.
    fn takes_value(self) -> bool {
        matches!(
            self,
            ArgKind::Int | ArgKind::Float | ArgKind::Double | ArgKind::Str
        )
    }

    /// Initial slot contents for this kind.
    fn empty_value(self) -> OptionValue {
        match self {
            ArgKind::None => OptionValue::Bool(false),
            ArgKind::Int => OptionValue::Int(0),
            ArgKind::Float => OptionValue::Float(0.0),
            ArgKind::Double => OptionValue::Double(0.0),
            ArgKind::Str => OptionValue::Str(None),
            ArgKind::Remain => OptionValue::List(Vec::new()),
        }
    }
}

/// Typed destination slot for one option.
/// Closed variant set so every bind is checked against the declared kind.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    Bool(bool),
    Int(i32),
    Float(f32),
    Double(f64),
    Str(Option<String>),
    List(Vec<String>),
}

impl OptionValue {
    /// Flag reading, false for any non-flag slot.
    pub fn as_bool(&self) -> bool {
        matches!(self, OptionValue::Bool(true))
    }

    /// String reading, None for unset or non-string slots.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            OptionValue::Str(value) => value.as_deref(),
            _ => None,
        }
    }
}

/// One declared option: names, kind, bound slot and help description.
#[derive(Debug, Clone)]
pub struct OptionEntry {
    name: String,
    short_name: String,
    kind: ArgKind,
    value: OptionValue,
    description: String,
}

impl OptionEntry {
    /// Creates an entry with its slot initialised for the declared kind.
    pub fn new(name: &str, short_name: &str, kind: ArgKind, description: &str) -> Self {
        Self {
            name: name.to_string(),
            short_name: short_name.to_string(),
            kind,
            value: kind.empty_value(),
            description: description.to_string(),
        }
    }

    fn matches(&self, text: &str) -> bool {
        self.name == text || self.short_name == text
    }
}

/// Parse failure taxonomy, mapped onto process exit codes by the caller.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OptionError {
    #[error("help requested")]
    HelpRequested,

    #[error("not enough arguments")]
    BelowMinimum,

    #[error("Invalid option(s)...")]
    InvalidOption(String),

    #[error("Missing argument for -{0}")]
    MissingArgument(String),

    #[error("invalid value '{value}' for -{option}")]
    InvalidValue { option: String, value: String },
}

impl OptionError {
    /// Process exit code for this parse outcome.
    pub fn exit_code(&self) -> u8 {
        match self {
            OptionError::HelpRequested => 0,
            _ => 2,
        }
    }
}

/// Raw token classification, option-like versus value-like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TokenKind {
    Option,
    Value,
}

/// One raw process argument after prefix inspection and stripping.
#[derive(Debug, Clone)]
struct OptionArgument {
    kind: TokenKind,
    text: String,
}

impl OptionArgument {
    /// Classifies one raw token by its leading prefix character.
    /// Option-like tokens lose one or two leading prefix characters.
    fn classify(raw: &str) -> Self {
        match raw.strip_prefix(OPTION_CHAR) {
            Some(stripped) => {
                let text = stripped.strip_prefix(OPTION_CHAR).unwrap_or(stripped);
                Self {
                    kind: TokenKind::Option,
                    text: text.to_string(),
                }
            }
            None => Self {
                kind: TokenKind::Value,
                text: raw.to_string(),
            },
        }
    }
}

/// Single-pass option parser over the raw process argument list.
/// The option table is installed once; parsing binds values into the
/// entries' typed slots and collects unconsumed value tokens as remains.
pub struct OptionParser {
    app_name: String,
    context: String,
    usages: Vec<String>,
    examples: Vec<String>,
    arg_min: usize,
    arguments: Vec<OptionArgument>,
    entries: Vec<OptionEntry>,
    // Entries before the synthetic remains slot; the synthetic entry is
    // appended last and never matched by name.
    declared_count: usize,
}

impl OptionParser {
    /// Captures the app name and derives classified tokens from the rest.
    pub fn new<I>(args: I, arg_min: usize) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let app_name = args.next().unwrap_or_default();
        let arguments = args.map(|raw| OptionArgument::classify(&raw)).collect();

        Self {
            app_name,
            context: String::new(),
            usages: Vec::new(),
            examples: Vec::new(),
            arg_min,
            arguments,
            entries: Vec::new(),
            declared_count: 0,
        }
    }

    /// Sets the one-line tool description shown in help output.
    pub fn set_context(&mut self, context: &str) {
        self.context = context.to_string();
    }

    /// Adds one usage line shown in help output.
    pub fn add_usage(&mut self, usage: &str) {
        self.usages.push(usage.to_string());
    }

    /// Adds one example invocation shown in help output.
    pub fn add_example(&mut self, example: &str) {
        self.examples.push(example.to_string());
    }

    /// Installs the declared option table and appends the synthetic
    /// remains entry that absorbs unconsumed value tokens.
    pub fn set_entries(&mut self, entries: Vec<OptionEntry>) {
        self.declared_count = entries.len();
        self.entries = entries;
        self.entries.push(OptionEntry::new(
            "remains",
            "*",
            ArgKind::Remain,
            "all option argument remains...",
        ));
    }

    /// Runs the single parse pass over the classified tokens.
    /// Failures leave slots bound up to the failure point, matching the
    /// in-order application contract.
    pub fn parse_options(&mut self) -> Result<(), OptionError> {
        if self.arguments.len() < self.arg_min {
            self.print_help();
            return Err(OptionError::BelowMinimum);
        }

        for index in 0..self.arguments.len() {
            let argument = self.arguments[index].clone();

            // A help token anywhere halts parsing immediately.
            if argument.text == "help" || argument.text == "h" {
                self.print_help();
                return Err(OptionError::HelpRequested);
            }

            // Value tokens already consumed by the previous option's
            // required argument are skipped, not reclassified as remains.
            if argument.kind == TokenKind::Value && !self.is_remain(&argument, index) {
                continue;
            }

            let slot = self.resolve(&argument)?;
            match self.entries[slot].kind {
                ArgKind::None => {
                    self.entries[slot].value = OptionValue::Bool(true);
                }
                ArgKind::Int | ArgKind::Float | ArgKind::Double | ArgKind::Str => {
                    let next = match self.arguments.get(index + 1) {
                        Some(next) => next.text.clone(),
                        None => return Err(OptionError::MissingArgument(argument.text)),
                    };
                    self.entries[slot].value =
                        parse_value(self.entries[slot].kind, &argument.text, &next)?;
                }
                ArgKind::Remain => {
                    if let OptionValue::List(values) = &mut self.entries[slot].value {
                        values.push(argument.text);
                    }
                }
            }
        }

        Ok(())
    }

    /// Ordered value tokens not bound to any declared option.
    pub fn remains(&self) -> &[String] {
        match self.entries.last() {
            Some(OptionEntry {
                value: OptionValue::List(values),
                ..
            }) => values,
            _ => &[],
        }
    }

    /// Parsed slot for an option, looked up by long or short name.
    pub fn value_of(&self, name: &str) -> Option<&OptionValue> {
        self.entries
            .iter()
            .find(|entry| entry.matches(name))
            .map(|entry| &entry.value)
    }

    /// Flag slot reading, false when the option is absent or unset.
    pub fn flag(&self, name: &str) -> bool {
        self.value_of(name).is_some_and(OptionValue::as_bool)
    }

    /// String slot reading, None when the option is absent or unset.
    pub fn string(&self, name: &str) -> Option<&str> {
        self.value_of(name).and_then(OptionValue::as_str)
    }

    /// Prints the Description / Usage / Example / Application Options help.
    pub fn print_help(&self) {
        let app_name = self.display_name();

        println!();
        println!("Description:");
        println!("  {}", self.context);
        println!();

        if !self.usages.is_empty() {
            if self.usages.len() == 1 {
                println!("Usage:");
            } else {
                println!("Usages:");
            }
            for usage in &self.usages {
                println!("  {} [OPTION...] {}", app_name, usage);
            }
            println!();
        }

        if !self.examples.is_empty() {
            if self.examples.len() == 1 {
                println!("Example:");
            } else {
                println!("Examples:");
            }
            for example in &self.examples {
                println!("  {} {}", app_name, example);
            }
            println!();
        }

        println!("Application Options:");
        for entry in &self.entries[..self.declared_count] {
            println!(
                "-{}, --{:<20} {}",
                entry.short_name, entry.name, entry.description
            );
        }
        println!();
    }

    /// App name with any leading path stripped for help rendering.
    fn display_name(&self) -> String {
        Path::new(&self.app_name)
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.app_name.clone())
    }

    /// Entry index for an option-like token, declared entries only.
    fn find_entry(&self, argument: &OptionArgument) -> Option<usize> {
        if argument.kind != TokenKind::Option {
            return None;
        }
        self.entries[..self.declared_count]
            .iter()
            .position(|entry| entry.matches(&argument.text))
    }

    /// One-token lookback: true when the previous token is a declared
    /// option that consumes a value.
    fn value_required(&self, index: usize) -> bool {
        self.find_entry(&self.arguments[index - 1])
            .map(|slot| self.entries[slot].kind.takes_value())
            .unwrap_or(false)
    }

    /// True when a value-like token is not attributable to the previous
    /// option and should fall through to the remains entry.
    fn is_remain(&self, argument: &OptionArgument, index: usize) -> bool {
        argument.kind == TokenKind::Value && (index == 0 || !self.value_required(index))
    }

    /// Maps a token onto an entry slot: declared match for option-like
    /// tokens, the synthetic remains slot for value-like tokens.
    fn resolve(&self, argument: &OptionArgument) -> Result<usize, OptionError> {
        match self.find_entry(argument) {
            Some(slot) => Ok(slot),
            None if argument.kind == TokenKind::Value => self
                .entries
                .len()
                .checked_sub(1)
                .ok_or_else(|| OptionError::InvalidOption(argument.text.clone())),
            None => Err(OptionError::InvalidOption(argument.text.clone())),
        }
    }
}

/// Converts a consumed value token according to the declared kind.
fn parse_value(kind: ArgKind, option: &str, text: &str) -> Result<OptionValue, OptionError> {
    let invalid = || OptionError::InvalidValue {
        option: option.to_string(),
        value: text.to_string(),
    };

    match kind {
        ArgKind::Int => text.parse().map(OptionValue::Int).map_err(|_| invalid()),
        ArgKind::Float => text.parse().map(OptionValue::Float).map_err(|_| invalid()),
        ArgKind::Double => text.parse().map(OptionValue::Double).map_err(|_| invalid()),
        ArgKind::Str => Ok(OptionValue::Str(Some(text.to_string()))),
        ArgKind::None | ArgKind::Remain => unreachable!("kind never consumes a value"),
    }
}
