use std::fs;
use std::path::Path;

fn main() {
    generate_build_info();

    #[cfg(windows)]
    {
        if Path::new("assets/app.ico").exists() {
            let mut res = winres::WindowsResource::new();
            res.set_icon("assets/app.ico");
            res.set("FileDescription", "Live Skaar Skogesal - Billedvev");
            res.set("ProductName", "Live Skogesal Portfolio");
            res.set("OriginalFilename", "portfolio.exe");
            res.set("LegalCopyright", "2025 © Live Skogesal");
            res.compile().expect("Failed to compile Windows resources");
        }
        println!("cargo:rerun-if-changed=assets/app.ico");
    }
}

/// `.build_number` holds "<date>_<n>"; it is read here, never written.
fn generate_build_info() {
    let build_file = Path::new(".build_number");
    let (date, build_num) = fs::read_to_string(build_file)
        .ok()
        .and_then(|content| {
            let (date, num) = content.trim().split_once('_')?;
            Some((date.to_string(), num.parse::<u32>().unwrap_or(1)))
        })
        .unwrap_or_else(|| ("unknown".to_string(), 1));

    println!("cargo:rustc-env=BUILD_DATE={}", date);
    println!("cargo:rustc-env=BUILD_NUMBER={}", build_num);
    println!("cargo:rustc-env=BUILD_INFO=build{}_{}", date, build_num);
    println!("cargo:rerun-if-changed=.build_number");
}
