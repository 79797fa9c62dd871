//! EDData cache inspection tool
//!
//! Developer CLI over the on-disk session cache: read, write and clear
//! entries in the same cache directory the application uses.

use std::env;

use anyhow::{bail, Context, Result};
use serde_json::Value;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use eddata_cache::cache::SessionCache;
use eddata_cache::keys;
use eddata_cache::storage::FileStore;
use eddata_cache::Config;

const USAGE: &str = "usage: eddata-cache <command>

commands:
  status                 show freshness of every session key
  get <key>              print the cached value for a key
  set <key> <json>       store a JSON value under a key
  del <key>              remove a key
  clear                  remove all session keys (sign-out teardown)";

fn main() -> Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "eddata_cache=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    let store = FileStore::open(&config.cache_dir).with_context(|| {
        format!("opening cache directory {}", config.cache_dir.display())
    })?;
    let mut cache = SessionCache::new(Box::new(store), keys::session_ttl_policy(&config));

    let args: Vec<String> = env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("status") | None => status(&mut cache),
        Some("get") => {
            let key = arg(&args, 1, "get <key>")?;
            match cache.load::<Value>(key) {
                Some(value) => println!("{}", serde_json::to_string_pretty(&value)?),
                None => println!("(miss)"),
            }
        }
        Some("set") => {
            let key = arg(&args, 1, "set <key> <json>")?;
            let raw = arg(&args, 2, "set <key> <json>")?;
            let value: Value =
                serde_json::from_str(raw).context("value must be valid JSON")?;
            cache.save(key, &value);
            println!("saved {key}");
        }
        Some("del") => {
            let key = arg(&args, 1, "del <key>")?;
            cache.delete(key);
            println!("deleted {key}");
        }
        Some("clear") => {
            for key in keys::SESSION_KEYS {
                cache.delete(key);
            }
            println!("cleared {} session keys", keys::SESSION_KEYS.len());
        }
        Some(other) => bail!("unknown command '{other}'\n\n{USAGE}"),
    }

    Ok(())
}

fn arg<'a>(args: &'a [String], index: usize, usage: &str) -> Result<&'a str> {
    args.get(index)
        .map(String::as_str)
        .with_context(|| format!("usage: eddata-cache {usage}"))
}

/// Prints hit/miss state for every session key, then the read counters.
fn status(cache: &mut SessionCache) {
    for key in keys::SESSION_KEYS {
        match cache.load::<Value>(key) {
            Some(_) => println!("{key:24} fresh"),
            None => println!("{key:24} miss"),
        }
    }
    let stats = cache.stats();
    println!(
        "\n{} fresh, {} missing ({} expired on read)",
        stats.hits, stats.misses, stats.expired
    );
}
