windows::include_bindings!();
