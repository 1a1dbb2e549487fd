use getarg::ArgTable;

fn main() {
    let mut table = ArgTable::from_env();
    // Listening is on by default, but the user may say otherwise.
    table.soft_set_bool_arg("-listen", true);

    let verbose = table.get_flag("-verbose");
    let listen = table.get_flag("-listen");
    let threads = match table.try_get_int_arg("-threads") {
        Ok(threads) => threads.unwrap_or(1),
        Err(error) => {
            eprintln!("Parse error: {error}");
            std::process::exit(1);
        }
    };
    let data_directory = table.get_arg("-datadir", "~/.flags");

    println!("verbose: {verbose}");
    println!("listen: {listen}");
    println!("threads: {threads}");
    println!("data directory: {data_directory}");
    println!("positional: {:?}", table.remaining());
}
