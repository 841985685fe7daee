/*!
 * Find the value of the eighth register that makes the teleporter confirmation
 * routine return 6, without waiting a billion years for the VM to do it.
 *
 * Author: Dave Eddy <ysap@daveeddy.com>
 * Date: December 21, 2025
 * License: MIT
 */

mod cache;
mod constants;
mod evaluator;
mod search;

use log::debug;
use search::Searcher;
use std::env;
use std::io::{self, Write};
use std::process;

fn main() {
    env_logger::builder()
        .format(|buf, record| writeln!(buf, "> {}", record.args()))
        .init();

    // nothing to configure
    let args: Vec<_> = env::args().skip(1).collect();
    if !args.is_empty() {
        debug!("ignoring arguments: {:?}", args);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let outcome = Searcher::default()
        .run(&mut out)
        .expect("failed to write to stdout");

    debug!("search finished: {:?}", outcome);

    // note: most platforms truncate this to 8 bits
    process::exit(outcome.exit_status());
}
