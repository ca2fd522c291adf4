use std::cmp::Ordering;
use std::env;
use std::path::PathBuf;
use std::process;

use semver_core::models::{BuildInfo, Version};
use semver_core::services::{comparator, ConfigService};
use semver_core::utils::logger;
use tracing::error;

/// 设置后日志同时以JSON格式写入该目录
const LOG_DIR_VAR: &str = "SEMVER_CORE_LOG_DIR";

fn main() {
    // 初始化日志系统, guard 需保存到进程退出
    let _guard = match env::var_os(LOG_DIR_VAR) {
        Some(dir) => Some(logger::init_json(&PathBuf::from(dir)).expect("日志系统初始化失败")),
        None => {
            logger::init().expect("日志系统初始化失败");
            None
        }
    };

    // 构建信息无法加载说明构建流水线有问题, 直接退出
    let build_info = ConfigService::load_build_info().unwrap_or_else(|e| {
        error!(error = %e, "构建信息加载失败");
        eprintln!("error: {}", e);
        process::exit(1);
    });

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        print_usage(&build_info);
        process::exit(1);
    }

    match args[1].as_str() {
        "version" | "--version" | "-v" => cmd_version(&build_info, &args[2..]),
        "parse" => cmd_parse(&args[2..]),
        "compare" => cmd_compare(&args[2..]),
        "sort" => cmd_sort(&args[2..]),
        "bump" => cmd_bump(&args[2..]),
        "help" | "--help" | "-h" => print_usage(&build_info),
        other => {
            eprintln!("error: unknown command '{}'\n", other);
            print_usage(&build_info);
            process::exit(1);
        }
    }
}

fn print_usage(build_info: &BuildInfo) {
    println!(
        "{program}: semantic version parsing and ordering\n\
         \n\
         Usage:\n\
         \x20 {program} version [--json]                   Show build information\n\
         \x20 {program} parse   <version>                  Show canonical form and fields\n\
         \x20 {program} compare <a> <b>                    Print less, equal or greater\n\
         \x20 {program} sort    <version>...               Sort versions ascending\n\
         \x20 {program} bump    <major|minor|patch> <v>    Bump a version\n\
         \x20 {program} help                               Show this message",
        program = build_info.program
    );
}

fn parse_or_exit(text: &str) -> Version {
    Version::parse(text).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        process::exit(1);
    })
}

fn expect_args(args: &[String], count: usize, usage: &str) {
    if args.len() != count {
        eprintln!("usage: {}", usage);
        process::exit(1);
    }
}

fn cmd_version(build_info: &BuildInfo, args: &[String]) {
    if args.iter().any(|a| a == "--json") {
        match serde_json::to_string_pretty(build_info) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: {}", e);
                process::exit(1);
            }
        }
    } else {
        println!("{}", build_info.banner());
    }
}

fn cmd_parse(args: &[String]) {
    expect_args(args, 1, "parse <version>");
    let version = parse_or_exit(&args[0]);
    println!("{}", version);
    println!("major:       {}", version.major);
    println!("minor:       {}", version.minor);
    println!("patch:       {}", version.patch);
    println!("pre-release: {}", version.pre_release);
    println!("metadata:    {}", version.build_metadata);
}

fn cmd_compare(args: &[String]) {
    expect_args(args, 2, "compare <a> <b>");
    let a = parse_or_exit(&args[0]);
    let b = parse_or_exit(&args[1]);
    let label = match comparator::compare(&a, &b) {
        Ordering::Less => "less",
        Ordering::Equal => "equal",
        Ordering::Greater => "greater",
    };
    println!("{}", label);
}

fn cmd_sort(args: &[String]) {
    let mut versions: Vec<Version> = args.iter().map(|a| parse_or_exit(a)).collect();
    comparator::sort(&mut versions);
    for version in &versions {
        println!("{}", version);
    }
}

fn cmd_bump(args: &[String]) {
    expect_args(args, 2, "bump <major|minor|patch> <version>");
    let mut version = parse_or_exit(&args[1]);
    let result = match args[0].as_str() {
        "major" => version.bump_major(),
        "minor" => version.bump_minor(),
        "patch" => version.bump_patch(),
        other => {
            eprintln!("error: unknown bump level '{}'", other);
            process::exit(1);
        }
    };
    if let Err(e) = result {
        eprintln!("error: {}", e);
        process::exit(1);
    }
    println!("{}", version);
}
