//! Static help, version and examples text.

/// Version banner and option summary, printed by `-v` and `-h`.
pub fn usage_text() -> String {
    let ver = env!("CARGO_PKG_VERSION");
    format!(
        "tol version {ver} (Rust rewrite)\n\
         \n\
         Copyright (C) 2014 Pietro Cerutti <gahr@gahr.ch>.  Rust rewrite (C) 2026 contributors.\n\
         \n\
         Redistribution and use in source and binary forms, with or without\n\
         modification, are permitted under the 2-clause BSD License.\n\
         \n\
         Usage: tol ?arg ...?\n\
         \n\
         \x20 arg         Evaluate the Tcl command inside 'arg'.\n\
         \x20 -c          Evaluate the following argument if it is a complete\n\
         \x20             Tcl command, or concatenate subsequent arguments up\n\
         \x20             to the first one not preceded by -c until they form\n\
         \x20             a complete Tcl command.\n\
         \x20 -e          Display some examples of usage.\n\
         \x20 -i          Ignore any errors from the following argument.\n\
         \x20 -p          Print the result of the command in the following argument.\n\
         \x20 -r          Reset the interpreter.\n\
         \x20 -s var val  Assign the value 'val' to the variable 'var'.\n\
         \x20 -v, -h      Display this message.\n\
         \n\
         Errors are reported as 'arg N, line L: message'.  The Tcl engine does\n\
         not track line numbers, so its errors read 'arg N: message' followed\n\
         by the Tcl stack trace.  Arguments must be valid UTF-8.\n\
         \n\
         Environment:\n\
         \x20 TOL_ENGINE  Interpreter to embed: tcl (default) or lua.\n\
         \x20 TOL_LOG     Diagnostic log filter, e.g. debug or tol=trace.\n"
    )
}

/// Worked examples, printed by `-e`.
pub const EXAMPLES: &str = r#"Examples:

tol 'puts Hello'
Hello

tol -p 'expr {1+2}'
3

tol 'set a 2' 'puts $a'
2

tol 'set a 2' -r 'puts $a'
arg 3: can't read "a": no such variable

tol 'puts before' 'set a 2' -r -i 'puts $a' 'puts after'
before
after

tol -s home $HOME 'puts "we are living in $home"'
we are living in /home/user

tol -c 'set vars [list' \
    -c editor -c $EDITOR \
    -c pager -c $PAGER ']' \
    'foreach {k v} $vars {puts "$k => $v"}'
editor => vim
pager => less
"#;

// ── Tests ─────────────────────────────────────────────────────────────────────
