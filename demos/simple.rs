// Take a look at the license at the top of the repository in the LICENSE file.

#![crate_type = "bin"]
#![allow(unused_must_use)]

use arm_cpuinfo::{ClassifyOptions, CpuInfo, PartDedup};
use std::io::{self, BufRead, Write};

fn print_help() {
    println!(
        "\
== Help menu ==

help               : shows this menu
quit               : exits the program

= Refresh commands =

refresh            : reloads CPU information with the current options
path [file]        : reads CPU information from [file] (no argument: default path)
unbounded          : keeps every distinct implementer and part
bounded            : keeps at most two distinct implementers and parts (default)
part_only          : considers parts with the same code as equal, whatever their vendor
pair               : considers parts equal only if their vendor matches as well (default)

= CPU commands =

all                : displays all CPU information
vendor             : displays CPU vendor(s)
model              : displays CPU model(s)
hardware           : displays the raw hardware string
cpus               : displays the number of logical CPUs
bogomips           : displays the total bogomips"
    );
}

fn interpret_input(input: &str, info: &mut CpuInfo, options: &mut ClassifyOptions) -> bool {
    match input.trim() {
        "help" => print_help(),
        "refresh" => {
            println!("Refreshing CPU information...");
            *info = CpuInfo::new_with_options(*options);
            println!("Done.");
        }
        "unbounded" => {
            *options = ClassifyOptions::unbounded().with_part_dedup(options.part_dedup());
            *info = CpuInfo::new_with_options(*options);
        }
        "bounded" => {
            *options = ClassifyOptions::new().with_part_dedup(options.part_dedup());
            *info = CpuInfo::new_with_options(*options);
        }
        "part_only" => {
            *options = options.with_part_dedup(PartDedup::PartOnly);
            *info = CpuInfo::new_with_options(*options);
        }
        "pair" => {
            *options = options.with_part_dedup(PartDedup::Pair);
            *info = CpuInfo::new_with_options(*options);
        }
        "all" => println!("{info:#?}"),
        "vendor" => println!("vendor: {}", info.vendor()),
        "model" => println!("model: {}", info.model()),
        "hardware" => println!("hardware: {}", info.hardware()),
        "cpus" => println!("number of logical CPUs: {}", info.cpu_count()),
        "bogomips" => println!("bogomips: {:.2}", info.bogomips()),
        "quit" | "exit" => return true,
        "" => {}
        e if e.starts_with("path") => {
            let path = e["path".len()..].trim();
            arm_cpuinfo::set_cpuinfo_path(if path.is_empty() {
                None
            } else {
                Some(path.into())
            });
            println!("Reading from `{}`", arm_cpuinfo::cpuinfo_path().display());
            *info = CpuInfo::new_with_options(*options);
        }
        e => {
            println!(
                "\"{e}\": Unknown command. Enter 'help' if you want to get the commands' \
                 list."
            );
        }
    }
    false
}

fn main() {
    if let Some(path) = std::env::args().nth(1) {
        arm_cpuinfo::set_cpuinfo_path(Some(path.into()));
    }
    if !arm_cpuinfo::IS_SUPPORTED_SYSTEM {
        println!("This target doesn't provide `/proc/cpuinfo`, use `path [file]`.");
    }

    println!("Getting CPU information...");
    let mut options = ClassifyOptions::new();
    let mut info = CpuInfo::new_with_options(options);
    println!("Done.");
    let t_stin = io::stdin();
    let mut stin = t_stin.lock();
    let mut done = false;

    println!("To get the commands' list, enter 'help'.");
    while !done {
        let mut input = String::new();
        write!(&mut io::stdout(), "> ");
        io::stdout().flush();

        stin.read_line(&mut input);
        if input.is_empty() {
            // The string is empty, meaning there is no '\n', meaning
            // that the user used CTRL+D so we can just quit!
            println!("\nLeaving, bye!");
            break;
        }
        if (&input as &str).ends_with('\n') {
            input.pop();
        }
        done = interpret_input(input.as_ref(), &mut info, &mut options);
    }
}
