//! Argument pre-filter: drops flags the command does not declare.
//!
//! Deployment scripts pass extra flags meant for other tools. Unknown
//! `--flag` and `--flag=value` tokens are removed, along with the value token
//! that follows a bare unknown flag. Stray positional tokens are dropped.
//! A repeated known flag keeps its first occurrence.

use std::collections::{HashMap, HashSet};

use clap::Command;

/// Long flag names declared on `command`, mapped to whether they take a value.
fn known_flags(command: &Command) -> HashMap<String, bool> {
    let mut flags: HashMap<String, bool> = command
        .get_arguments()
        .filter_map(|arg| arg.get_long().map(|long| (long.to_string(), arg.get_action().takes_values())))
        .collect();
    flags.entry("help".to_string()).or_insert(false);
    flags.entry("version".to_string()).or_insert(false);
    flags
}

/// Keep the program name and every token `command` understands.
pub fn retain_known_args<I>(args: I, command: &Command) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let known = known_flags(command);
    let mut seen: HashSet<String> = HashSet::new();
    let mut tokens = args.into_iter().peekable();
    let mut kept: Vec<String> = tokens.next().into_iter().collect();

    while let Some(token) = tokens.next() {
        if token == "--" {
            break;
        }

        if let Some(flag) = token.strip_prefix("--") {
            let (name, inline_value) = match flag.split_once('=') {
                Some((name, value)) => (name, Some(value)),
                None => (flag, None),
            };
            match known.get(name) {
                Some(&takes_value) => {
                    let needs_value = takes_value && inline_value.is_none();
                    let value =
                        if needs_value { tokens.next_if(|next| !next.starts_with("--")) } else { None };
                    if !seen.insert(name.to_string()) {
                        tracing::debug!(flag = %name, "ignoring repeated flag");
                        continue;
                    }
                    kept.push(token.clone());
                    kept.extend(value);
                }
                None => {
                    tracing::debug!(flag = %name, "ignoring unknown flag");
                    if inline_value.is_none() {
                        tokens.next_if(|next| !next.starts_with('-'));
                    }
                }
            }
            continue;
        }

        if token == "-h" || token == "-V" {
            kept.push(token);
        }
    }

    kept
}
