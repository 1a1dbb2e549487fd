use getarg::{ArgTable, InvalidValue, Loader};
use rstest::rstest;

fn load(line: &str) -> ArgTable {
    let args = std::iter::once("testprogram").chain(line.split_whitespace());
    ArgTable::load(args)
}

#[rstest]
#[case("-pac", true)]
#[case("-pac=1", true)]
#[case("-pac=0", false)]
#[case("--pac", true)]
#[case("--pac=1", true)]
#[case("-nopac", false)]
#[case("-nopac=1", false)]
#[case("-nopac=0", true)]
#[case("--nopac=1", false)]
#[case("-pac -nopac", true)]
#[case("-nopac -pac", true)]
#[case("-pac --nopac", true)]
#[case("-pac=1 -nopac=1", true)]
#[case("-pac=0 -nopac=0", false)]
fn bool_arg(#[case] line: &str, #[case] expected: bool) {
    let table = load(line);
    assert_eq!(table.get_flag("-pac"), expected);
    assert_eq!(table.get_bool_arg("-pac", false), expected);
    assert_eq!(table.get_bool_arg("-pac", true), expected);
}

#[rstest]
#[case("-fo")]
#[case("-paco")]
fn bool_arg_absent(#[case] key: &str) {
    let table = load("-pac");
    assert!(!table.get_flag(key));
    assert!(!table.get_bool_arg(key, false));
    assert!(table.get_bool_arg(key, true));
}

#[rstest]
#[case("", "", "")]
#[case("", "eleven", "eleven")]
#[case("-pac -bar", "", "")]
#[case("-pac -bar", "eleven", "")]
#[case("-pac=", "", "")]
#[case("-pac=", "eleven", "")]
#[case("-pac=11", "", "11")]
#[case("-pac=11", "eleven", "11")]
#[case("-pac=eleven", "", "eleven")]
#[case("-pac=eleven", "eleven", "eleven")]
fn string_arg(#[case] line: &str, #[case] default: &str, #[case] expected: &str) {
    assert_eq!(load(line).get_arg("-pac", default), expected);
}

#[rstest]
#[case("", "-pac", 11, 11)]
#[case("", "-pac", 0, 0)]
#[case("-pac -bar", "-pac", 11, 0)]
#[case("-pac -bar", "-bar", 11, 0)]
#[case("-pac=11 -bar=12", "-pac", 0, 11)]
#[case("-pac=11 -bar=12", "-bar", 11, 12)]
#[case("-pac=NaN -bar=NotANumber", "-pac", 1, 0)]
#[case("-pac=NaN -bar=NotANumber", "-bar", 11, 0)]
fn int_arg(#[case] line: &str, #[case] key: &str, #[case] default: i64, #[case] expected: i64) {
    assert_eq!(load(line).get_int_arg(key, default), expected);
}

#[test]
fn double_dash() {
    assert!(load("--pac").get_flag("-pac"));

    let table = load("--pac=verbose --bar=1");
    assert_eq!(table.get_arg("-pac", ""), "verbose");
    assert_eq!(table.get_int_arg("-bar", 0), 1);
}

#[rstest]
#[case("-pac=1 -bar -x=y")]
#[case("-pac -pac=2 -nofo -fo=0")]
#[case("-a=b=c -nob -noc=0 -d= -e=-1")]
fn double_dash_equivalence(#[case] line: &str) {
    let doubled = line
        .split_whitespace()
        .map(|token| format!("-{token}"))
        .collect::<Vec<String>>()
        .join(" ");
    assert_eq!(load(line), load(&doubled));
}

#[rstest]
#[case("")]
#[case("-pac")]
#[case("-pac -nopac -bar=2 -bar=3 positional -fo")]
fn idempotent(#[case] line: &str) {
    assert_eq!(load(line), load(line));
}

#[test]
fn positional_ends_options() {
    let table = load("-pac=1 input.dat -bar=2");
    assert!(table.get_flag("-pac"));
    assert!(!table.is_set("-bar"));
    assert_eq!(table.remaining(), ["input.dat", "-bar=2"]);
}

#[test]
fn multi_arg() {
    let table = load("-connect=a -pac -connect=b -connect=");
    assert_eq!(table.get_arg("-connect", "none"), "");
    assert_eq!(table.get_multi_arg("-connect"), ["a", "b", ""]);
    assert_eq!(table.keys().collect::<Vec<_>>(), vec!["connect", "pac"]);
}

#[test]
fn strict_accessors() {
    let table = load("-pac=NaN -bar=12 -fo");
    assert!(matches!(
        table.try_get_int_arg("-pac"),
        Err(InvalidValue::NotAnInteger { .. })
    ));
    assert_eq!(table.try_get_int_arg("-bar"), Ok(Some(12)));
    assert_eq!(table.try_get_bool_arg("-fo"), Ok(Some(true)));
    assert_eq!(table.try_get_bool_arg("-none"), Ok(None));
    assert_eq!(table.get_int_arg("-pac", 1), 0);
}

#[test]
fn soft_set() {
    let mut table = load("-nolisten");
    assert!(!table.soft_set_bool_arg("-listen", true));
    assert!(table.soft_set_arg("-port", "8333"));
    assert!(!table.get_flag("-listen"));
    assert_eq!(table.get_int_arg("-port", 0), 8333);
}

#[test]
fn loader_conventions() {
    let table = Loader::new()
        .skip_program_name(false)
        .slash_prefix(true)
        .lowercase_keys(true)
        .load(["/PAC", "-NoBar"]);
    assert!(table.get_flag("-pac"));
    assert!(!table.get_bool_arg("-bar", true));
}
