//! Fixed-column line builders

/// Builds a header line: content padded to 60 columns, followed by the label
pub fn header_line(content: &str, label: &str) -> String {
    format!("{:<60}{}", content, label).trim_end().to_string()
}

/// Builds a `PRN / EPOCH / SV CLK` line
pub fn epoch_line(prn: u8, epoch: (u8, u8, u8, u8, u8, f64), clock: [&str; 3]) -> String {
    let (yy, mm, dd, hh, mi, ss) = epoch;
    format!(
        "{:2} {:02} {:2} {:2} {:2} {:2}{:5.1}{:>19}{:>19}{:>19}",
        prn, yy, mm, dd, hh, mi, ss, clock[0], clock[1], clock[2]
    )
    .trim_end()
    .to_string()
}

/// Builds a `BROADCAST ORBIT` line
pub fn orbit_line(fields: [&str; 4]) -> String {
    format!(
        "   {:>19}{:>19}{:>19}{:>19}",
        fields[0], fields[1], fields[2], fields[3]
    )
    .trim_end()
    .to_string()
}

/// Builds one complete 8 line navigation message for given PRN
pub fn nav_block(prn: u8) -> Vec<String> {
    vec![
        epoch_line(
            prn,
            (21, 1, 1, 0, 0, 0.0),
            ["-0.366280227900D-03", "-0.102318153950D-10", "0.000000000000D+00"],
        ),
        orbit_line([
            "0.510000000000D+02",
            "-0.126562500000D+02",
            "0.426231218002D-08",
            "-0.299418302905D+01",
        ]),
        orbit_line([
            "-0.733137130737D-06",
            "0.105225071311D-01",
            "0.918842852116D-05",
            "0.515368935013D+04",
        ]),
        orbit_line([
            "0.432000000000D+06",
            "-0.242143869400D-07",
            "0.174026232318D+01",
            "-0.540167093277D-07",
        ]),
        orbit_line([
            "0.977007460105D+00",
            "0.173843750000D+03",
            "0.860009779698D+00",
            "-0.774782271004D-08",
        ]),
        orbit_line([
            "0.280726264296D-09",
            "0.100000000000D+01",
            "0.213800000000D+04",
            "0.000000000000D+00",
        ]),
        orbit_line([
            "0.200000000000D+01",
            "0.000000000000D+00",
            "0.465661287308D-08",
            "0.510000000000D+02",
        ]),
        orbit_line(["0.425538000000D+06", "0.400000000000D+01", "", ""]),
    ]
}
