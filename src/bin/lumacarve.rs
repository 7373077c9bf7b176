// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Command-line front end: decode, carve, encode, and report how
//! long the whole thing took.

extern crate clap;
extern crate image;

use clap::{App, Arg};
use image::{ColorType, DynamicImage};
use lumacarve::{dump, CarveError, Carver};
use std::path::{Path, PathBuf};
use std::time::Instant;

fn run() -> Result<(), failure::Error> {
    let matches = App::new("lumacarve")
        .version("0.1.0")
        .about("Shrink an image's width by carving out low-cost vertical seams")
        .arg(
            Arg::with_name("image")
                .help("The image to carve")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("seams")
                .help("How many vertical seams to remove")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .takes_value(true)
                .help("Where to write the carved PNG (default: <stem>_<seams>.png)"),
        )
        .arg(
            Arg::with_name("dump-seams")
                .long("dump-seams")
                .help("Also write one red-on-black image per removed seam"),
        )
        .get_matches();

    let input = PathBuf::from(matches.value_of("image").unwrap());
    let seams: u32 = matches.value_of("seams").unwrap().parse()?;
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("carved")
        .to_string();
    let output = match matches.value_of("output") {
        Some(path) => PathBuf::from(path),
        None => input.with_file_name(format!("{}_{}.png", stem, seams)),
    };

    let started = Instant::now();

    let img = image::open(&input)?;
    // Anything carrying an alpha channel carves as four channels and
    // loses the alpha at the end; everything else is expanded to RGB.
    let (pixels, width, height, channels) = match img {
        DynamicImage::ImageLumaA8(_) | DynamicImage::ImageRgba8(_) | DynamicImage::ImageBgra8(_) => {
            let rgba = img.to_rgba();
            let (w, h) = rgba.dimensions();
            (rgba.into_raw(), w, h, 4u8)
        }
        _ => {
            let rgb = img.to_rgb();
            let (w, h) = rgb.dimensions();
            (rgb.into_raw(), w, h, 3u8)
        }
    };
    println!(
        "Loaded a {}px by {}px image with {} channels",
        width, height, channels
    );

    if seams >= width {
        return Err(CarveError::TooManySeams { seams, width }.into());
    }
    let mut carver = Carver::new(pixels, width, height, channels)?;
    for n in 0..seams {
        let seam_width = carver.width();
        let seam = carver.remove_next_seam()?;
        if matches.is_present("dump-seams") {
            let seam_path = input.with_file_name(format!("{}_seam_{}.png", stem, n));
            dump::seam_to_image(&seam, seam_width, carver.height()).save(&seam_path)?;
        }
    }
    let carved = carver.finish();

    image::save_buffer(
        Path::new(&output),
        &carved,
        width - seams,
        height,
        ColorType::RGB(8),
    )?;
    println!(
        "Wrote {} ({}x{}) in {:?}",
        output.display(),
        width - seams,
        height,
        started.elapsed()
    );
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("lumacarve: {}", err);
        std::process::exit(1);
    }
}
