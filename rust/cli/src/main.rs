use std::io;

fn main() {
    noughts_cli::logging::init_logging();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();
    let mut err = io::stderr();

    let code = noughts_cli::run(&mut out, &mut err, &mut input);
    std::process::exit(code);
}
