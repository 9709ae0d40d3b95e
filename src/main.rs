use clap::Parser;
use enc_extract_lib::{
    config::DEFAULT_LAYER,
    logging,
    pipeline::extract,
    ui::{
        cli::{Args, resolve_parent_dir},
        output::{print_error, print_final_report},
    },
};
use std::process;

fn main() {
    logging::init();

    let args = Args::parse();
    let parent_dir = resolve_parent_dir(&args);

    match extract(&parent_dir, &args.output, args.source) {
        Ok(count) => print_final_report(count, DEFAULT_LAYER.name, &args.output),
        Err(e) => {
            print_error(&format!("{:#}", e));
            process::exit(1);
        }
    }
}
