// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_screenplay(scenes: usize) -> String {
    let mut content = String::new();

    for scene in 0..scenes {
        content.push_str(&format!("int. location {scene} - day\n\n"));
        content.push_str("The room is quiet. Dust hangs in the light from a single window while somebody paces just out of frame.\n\n");
        content.push_str("ALEX\n(tired)\nWe have been over this a hundred times already and nothing has changed.\n\n");
        content.push_str("SAM\nThen we go over it again.\n\n");
        if scene % 3 == 0 {
            content.push_str("SMASH CUT TO:\n\n");
        }
    }

    content
}

#[allow(dead_code)]
pub fn generate_unstructured_draft(paragraphs: usize) -> String {
    let base = "Fade in on a city at night\nrain everywhere, neon reflecting off wet asphalt\nA CAR SCREECHES AROUND THE CORNER AND SLAMS INTO A ROW OF TRASH CANS\nDRIVER\nget out, get out now\n\n";
    base.repeat(paragraphs)
}
