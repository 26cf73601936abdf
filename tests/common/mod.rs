//! Plugins registered from a module other than the one collecting them.

use gather::Collector;

pub type Plugin = fn() -> &'static str;

pub static WEIRD_COMMANDS: Collector<Plugin> = Collector::new();

pub fn weird_function() -> &'static str {
    "weird_function"
}
