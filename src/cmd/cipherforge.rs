use cipherforge::session::main::run_session;

fn main() {
    run_session();
}
