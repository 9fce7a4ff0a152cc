use std::process;

#[cfg(windows)]
fn main() {
    use cliplock::inspector::inspect;
    use cliplock::windows::NativeClipboard;

    match inspect(&NativeClipboard) {
        Ok(report) => print!("{}", report),
        Err(error) => {
            eprintln!("cliplock: {}", error);
            process::exit(1);
        }
    }
}

#[cfg(not(windows))]
fn main() {
    eprintln!("cliplock only supports Windows platforms");
    process::exit(1);
}
