/// First ruler line: decade numbers right-aligned at columns 10, 20, ...
pub fn decade_line(width: usize) -> String {
    let mut line = vec![' '; width];

    for column in (10..=width).step_by(10) {
        let label: Vec<char> = (column / 10).to_string().chars().collect();
        let start = column - label.len();
        line[start..column].copy_from_slice(&label);
    }

    line.into_iter().collect()
}

/// Second ruler line: `1234567890` repeated
pub fn digit_line(width: usize) -> String {
    (1..=width)
        .map(|column| char::from(b'0' + (column % 10) as u8))
        .collect()
}
