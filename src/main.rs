use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use paste_rewrite::config::{
	FileStore, ReplaceRule, SettingsStore, TransformConfig, plain_paste_forced, render_config,
};
use paste_rewrite::paste::{
	ClipboardReader, PasteOutcome, StreamReader, WriterInserter, handle_paste,
};
use paste_rewrite::pipeline::TransformRequest;

#[derive(Parser)]
#[command(name = "paste-rewrite")]
#[command(
	author,
	version,
	about = "Rewrite pasted text with literal replace rules and Korean particle correction"
)]
struct Cli {
	#[command(subcommand)]
	command: Option<Commands>,

	/// Settings file to use instead of the default location
	#[arg(long, global = true, value_name = "PATH")]
	config: Option<PathBuf>,

	/// Log each step to stderr
	#[arg(short, long, global = true)]
	verbose: bool,

	/// Paste the text unchanged (skip all transformations)
	#[arg(long)]
	plain: bool,

	/// Write the default settings file
	#[arg(long)]
	init: bool,

	/// Overwrite an existing settings file when using --init
	#[arg(long, requires = "init")]
	force: bool,

	/// Text to transform; read from stdin when omitted.
	///
	/// Text that is exactly a subcommand name (config, rules, prefix, suffix)
	/// is taken as that subcommand; pipe such text through stdin instead.
	#[arg(allow_hyphen_values = true)]
	text: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
	/// Settings file commands
	Config {
		#[command(subcommand)]
		action: ConfigAction,
	},
	/// Edit the replace rules
	Rules {
		#[command(subcommand)]
		action: RulesAction,
	},
	/// Set or disable the text prepended to every paste
	Prefix(AffixArgs),
	/// Set or disable the text appended to every paste
	Suffix(AffixArgs),
}

#[derive(Subcommand)]
enum ConfigAction {
	/// Display the effective settings
	Show,
	/// Check the settings file for errors
	Validate,
	/// Print the settings file location
	Path,
}

#[derive(Subcommand)]
enum RulesAction {
	/// List rules in application order
	List,
	/// Append a rule (`\n`, `\r`, `\t` and `\\` escapes are understood)
	Add {
		#[arg(allow_hyphen_values = true)]
		from: String,
		#[arg(allow_hyphen_values = true)]
		to: String,
		/// Store the rule without enabling it
		#[arg(long)]
		disabled: bool,
	},
	/// Remove the rule at a position (1-based)
	Remove { index: usize },
	/// Enable the rule at a position (1-based)
	Enable { index: usize },
	/// Disable the rule at a position (1-based)
	Disable { index: usize },
}

#[derive(Args)]
struct AffixArgs {
	/// New text; enables the option
	#[arg(allow_hyphen_values = true)]
	text: Option<String>,

	/// Disable the option, keeping its text
	#[arg(long, conflicts_with = "text")]
	off: bool,
}

#[derive(Clone, Copy)]
enum Affix {
	Prefix,
	Suffix,
}

fn main() -> ExitCode {
	match run() {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn run() -> Result<ExitCode> {
	let cli = Cli::parse();
	init_logging(cli.verbose);

	let store = FileStore::open(cli.config.as_deref()).context("Failed to locate settings file")?;

	if cli.init {
		return handle_init(&store, cli.force);
	}

	if let Some(command) = cli.command {
		return match command {
			Commands::Config { action } => match action {
				ConfigAction::Show => handle_config_show(&store),
				ConfigAction::Validate => handle_config_validate(&store),
				ConfigAction::Path => {
					println!("{}", store.path().display());
					Ok(ExitCode::SUCCESS)
				}
			},
			Commands::Rules { action } => handle_rules(&store, action),
			Commands::Prefix(args) => handle_affix(&store, Affix::Prefix, args),
			Commands::Suffix(args) => handle_affix(&store, Affix::Suffix, args),
		};
	}

	handle_transform(&store, cli.text, cli.plain)
}

fn init_logging(verbose: bool) {
	let default_level = if verbose { "debug" } else { "warn" };
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
		.format_timestamp(None)
		.init();
}

fn handle_transform(store: &FileStore, text: Option<String>, plain: bool) -> Result<ExitCode> {
	let request = TransformRequest {
		bypass_transform: plain || plain_paste_forced(),
	};

	let mut reader: Box<dyn ClipboardReader> = match text {
		Some(text) => Box::new(Some(text)),
		None => Box::new(StreamReader::new(io::stdin().lock())),
	};
	let mut output = WriterInserter::new(io::stdout().lock());

	match handle_paste(reader.as_mut(), store, &mut [&mut output], request) {
		PasteOutcome::Inserted { .. } => Ok(ExitCode::SUCCESS),
		PasteOutcome::NativePaste => anyhow::bail!("No readable text to transform"),
		PasteOutcome::InsertFailed { .. } => anyhow::bail!("Failed to write transformed text"),
	}
}

fn handle_init(store: &FileStore, force: bool) -> Result<ExitCode> {
	let path = store.path();
	if path.exists() && !force {
		anyhow::bail!(
			"{} already exists. Use --force to overwrite.",
			path.display()
		);
	}

	store
		.set(&TransformConfig::default())
		.with_context(|| format!("Failed to write {}", path.display()))?;

	println!("Created {}", path.display());
	Ok(ExitCode::SUCCESS)
}

fn handle_config_show(store: &FileStore) -> Result<ExitCode> {
	let path = store.path();
	if path.exists() {
		println!("# Source: {}", path.display());
	} else {
		println!("# Source: {} (not found, showing defaults)", path.display());
	}
	println!();

	let rendered = render_config(&store.get()).context("Failed to render settings")?;
	print!("{}", rendered);
	Ok(ExitCode::SUCCESS)
}

fn handle_config_validate(store: &FileStore) -> Result<ExitCode> {
	match store.load() {
		Ok(Some(config)) => {
			println!(
				"Settings file is valid: {} ({} rules)",
				store.path().display(),
				config.rules.len()
			);
			Ok(ExitCode::SUCCESS)
		}
		Ok(None) => {
			println!(
				"No settings file found at {}; defaults apply.",
				store.path().display()
			);
			Ok(ExitCode::SUCCESS)
		}
		Err(e) => {
			eprintln!("Settings error: {:#}", anyhow::Error::from(e));
			Ok(ExitCode::FAILURE)
		}
	}
}

fn handle_rules(store: &FileStore, action: RulesAction) -> Result<ExitCode> {
	let mut config = load_for_edit(store)?;

	match action {
		RulesAction::List => {
			print_rules(&config);
			return Ok(ExitCode::SUCCESS);
		}
		RulesAction::Add { from, to, disabled } => {
			let from = unescape(from.trim());
			let to = unescape(to.trim());
			if from.is_empty() {
				anyhow::bail!("Rule `from` must not be empty");
			}
			let rule = if disabled {
				ReplaceRule::disabled(from, to)
			} else {
				ReplaceRule::new(from, to)
			};
			config.add_rule(rule);
		}
		RulesAction::Remove { index } => {
			let removed = config.remove_rule(index)?;
			println!("Removed {:?} -> {:?}", removed.from, removed.to);
		}
		RulesAction::Enable { index } => config.set_rule_enabled(index, true)?,
		RulesAction::Disable { index } => config.set_rule_enabled(index, false)?,
	}

	save(store, &config)?;
	print_rules(&config);
	Ok(ExitCode::SUCCESS)
}

fn handle_affix(store: &FileStore, affix: Affix, args: AffixArgs) -> Result<ExitCode> {
	let mut config = load_for_edit(store)?;

	let (enabled, text) = match affix {
		Affix::Prefix => (&mut config.prefix_enabled, &mut config.prefix_text),
		Affix::Suffix => (&mut config.suffix_enabled, &mut config.suffix_text),
	};
	*enabled = !args.off;
	if let Some(new_text) = args.text {
		*text = new_text.trim().to_string();
	}
	let state = if *enabled { "on" } else { "off" };
	let line = format!("{state}: {text:?}");

	save(store, &config)?;
	println!("{}", line);
	Ok(ExitCode::SUCCESS)
}

/// Load the settings file strictly so a broken file is never overwritten with defaults.
fn load_for_edit(store: &FileStore) -> Result<TransformConfig> {
	let config = store
		.load()
		.with_context(|| format!("Failed to load {}", store.path().display()))?;
	Ok(config.unwrap_or_default())
}

fn save(store: &FileStore, config: &TransformConfig) -> Result<()> {
	store
		.set(config)
		.with_context(|| format!("Failed to save {}", store.path().display()))
}

fn print_rules(config: &TransformConfig) {
	if config.rules.is_empty() {
		println!("No replace rules.");
		return;
	}
	for (i, rule) in config.rules.iter().enumerate() {
		let mark = if rule.enabled { "x" } else { " " };
		println!("{:>3}. [{}] {:?} -> {:?}", i + 1, mark, rule.from, rule.to);
	}
}

/// Expand `\n`, `\r`, `\t` and `\\`; other backslashes are kept as typed.
fn unescape(input: &str) -> String {
	let mut out = String::with_capacity(input.len());
	let mut chars = input.chars().peekable();

	while let Some(c) = chars.next() {
		if c != '\\' {
			out.push(c);
			continue;
		}
		match chars.peek() {
			Some('n') => out.push('\n'),
			Some('r') => out.push('\r'),
			Some('t') => out.push('\t'),
			Some('\\') => out.push('\\'),
			_ => {
				out.push('\\');
				continue;
			}
		}
		chars.next();
	}

	out
}
