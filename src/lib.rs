//! `getarg` is a permissive command line option table for Rust.
//!
//! Rather than declaring the expected parameters up front, `getarg` loads whatever options appear on the Cli into a table.
//! The program then queries the table by key, with a typed accessor and a default for when the option is absent.
//! `getarg` prioritizes the following:
//! * *Permissive parsing*:
//! Loading never fails, and the lenient accessors never fail.
//! Missing options produce the caller's default; malformed values degrade to `0`/`false`.
//! * *Negated flags*:
//! Any boolean option `-name` may be switched off with `-noname`.
//! * *Parse once, query many*:
//! The [`ArgTable`] is an owned value; there is no process-wide state.
//!
//! # Usage
//! ```no_run
#![doc = include_str!("../demos/flags.rs")]
//! ```
//!
//! ```console
//! $ flags -verbose --threads=4 -nolisten input.dat
//! verbose: true
//! listen: false
//! threads: 4
//! data directory: ~/.flags
//! positional: ["input.dat"]
//! ```
//!
//! # Cli Semantics
//! `getarg` loads the Cli tokens according to the following rules.
//!
//! * The first token is the program name, and is skipped.
//! * An option is a token beginning with `-` or `--`; both are equivalent (`--pac` is `-pac`).
//! * The value of an option follows the first `=` character.
//! For example, `-key=123=456` has the value `123=456`.
//! Without an `=`, the value is the empty string.
//! * The first token that does not begin with a dash ends option scanning.
//! It, and every token after it, are available via [`ArgTable::remaining`].
//! * When an option is repeated, the final value wins.
//! Every value is kept in order, available via [`ArgTable::get_multi_arg`].
//! * An option `-no<name>` sets `<name>` to the opposite of its own boolean value.
//! For example, `-nopac` is equivalent to `-pac=0`, and `-nopac=0` is equivalent to `-pac=1`.
//! A directly supplied `-<name>` always wins over `-no<name>`, regardless of order.
//!
//! ### Accessors
//! Keys are passed to the accessors with a leading dash (ex: `"-pac"`).
//!
//! ```console
//! Accessor                     | Absent   | Bare flag | Numeric    | Non-numeric
//! ------------------------------------------------------------------------------
//! get_arg(key, default)        | default  | ""        | text       | text
//! get_int_arg(key, default)    | default  | 0         | integer    | leading digits, else 0
//! get_bool_arg(key, default)   | default  | true      | != 0       | false
//! try_get_int_arg(key)         | Ok(None) | Err       | Ok(Some)   | Err
//! try_get_bool_arg(key)        | Ok(None) | Ok(true)  | Ok(!= 0)   | Err
//! ```
//!
//! ### Configuration
//! The [`Loader`] accepts Windows style conventions: `/key` options and case-insensitive keys.
//!
//! ```
//! use getarg::Loader;
//!
//! let table = Loader::new()
//!     .slash_prefix(true)
//!     .lowercase_keys(true)
//!     .load(["program", "/Server", "-RPCPort=8332"]);
//!
//! assert!(table.get_flag("-server"));
//! assert_eq!(table.get_int_arg("-rpcport", 0), 8332);
//! ```
//!
//! # Features
//! * `tracing_debug`: Log the loader's decisions via `tracing`.
//! * `unit_test`: For features that help with unit testing.
pub use getarg_core::*;
