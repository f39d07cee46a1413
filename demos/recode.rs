// This is a part of jconv.
// See README.md and LICENSE.txt for details.

use std::env;
use std::fs::File;
use std::io::{self, Read, Write};
use std::process::exit;

use getopts::Options;
use jconv::{ConvError, ConvHandle};

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut opts = Options::new();
    opts.optopt("f", "from-code", "set input encoding", "NAME");
    opts.optopt("t", "to-code", "set output encoding", "NAME");
    opts.optflag("c", "", "skip illegal byte sequences instead of failing");
    opts.optopt("o", "output", "output file", "FILE");
    opts.optflag("h", "help", "print this help menu");

    let matches = match opts.parse(&args[1..]) {
        Ok(m) => m,
        Err(e) => die(&e.to_string()),
    };
    if matches.opt_present("h") {
        println!("{}", opts.usage("Converts the character encoding using jconv."));
        return;
    }

    let from = matches.opt_str("f").unwrap_or_else(|| "utf-8".to_string());
    let to = matches.opt_str("t").unwrap_or_else(|| "utf-8".to_string());
    let skip_illegal = matches.opt_present("c");

    let mut conv = match ConvHandle::open(&to, &from) {
        Some(conv) => conv,
        None => die(&format!("unsupported conversion from {} to {}", from, to)),
    };

    let mut input: Box<dyn Read> = match matches.free.first().map(|s| &s[..]) {
        Some("-") | None => Box::new(io::stdin()),
        Some(f) => match File::open(f) {
            Ok(file) => Box::new(file),
            Err(e) => die(&format!("cannot open {}: {}", f, e)),
        },
    };
    let mut output: Box<dyn Write> = match matches.opt_str("o").as_deref() {
        Some("-") | None => Box::new(io::stdout()),
        Some(f) => match File::create(f) {
            Ok(file) => Box::new(file),
            Err(e) => die(&format!("cannot create {}: {}", f, e)),
        },
    };

    if let Err(e) = recode(&mut conv, &mut *input, &mut *output, skip_illegal) {
        die(&e.to_string());
    }
}

/// Streams `input` into `output` through fixed buffers, topping up the
/// input on `InputNotEnough` and draining the output on `OutputNotEnough`.
fn recode(
    conv: &mut ConvHandle,
    input: &mut dyn Read,
    output: &mut dyn Write,
    skip_illegal: bool,
) -> io::Result<()> {
    let mut inbuf = [0u8; 4096];
    let mut outbuf = [0u8; 4096];
    let mut pending = 0; // unconsumed bytes at the front of inbuf

    loop {
        let got = input.read(&mut inbuf[pending..])?;
        let end = pending + got;
        if end == 0 {
            return output.flush();
        }

        let mut pos = 0;
        loop {
            let (done, err) = conv.convert(&inbuf[pos..end], &mut outbuf);
            pos += done.consumed;
            output.write_all(&outbuf[..done.written])?;
            match err {
                None | Some(ConvError::OutputNotEnough) => {}
                Some(ConvError::InputNotEnough) => break,
                Some(ConvError::IllegalSequence) => {
                    if !skip_illegal {
                        return Err(io::Error::new(
                            io::ErrorKind::InvalidData,
                            format!("illegal byte sequence at offset {}", pos),
                        ));
                    }
                    pos += 1; // resynchronize one byte at a time
                }
            }
            if pos == end {
                break;
            }
        }

        // a character split across reads stays behind for the next round
        inbuf.copy_within(pos..end, 0);
        pending = end - pos;
        if got == 0 {
            return if pending == 0 {
                output.flush()
            } else {
                Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input ends with an incomplete character",
                ))
            };
        }
    }
}

fn die(msg: &str) -> ! {
    let _ = writeln!(io::stderr(), "recode: {}", msg);
    exit(1)
}
