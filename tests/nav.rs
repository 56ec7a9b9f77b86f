use rinex_nav::prelude::*;

use std::io::Cursor;

const HEADER: &str = "     2.11           N: GPS NAV DATA                         RINEX VERSION / TYPE
                                                            END OF HEADER
";

const PRN3: &str = " 3 21  1  1  0  0  0.0 0.178911723197D-03-0.329691829393D-11 0.000000000000D+00
    0.880000000000D+02-0.117500000000D+02 0.498841064240D-08 0.104839541015D+01
   -0.659376382828D-06 0.141616617236D-01 0.937283039093D-05 0.515363525963D+04
    0.439200000000D+06 0.558793544769D-08-0.102063216374D+01 0.111758708954D-07
    0.953498640017D+00 0.182437500000D+03-0.239213626024D+01-0.819355844318D-08
   -0.402159322178D-09 0.100000000000D+01 0.213800000000D+04 0.000000000000D+00
    0.200000000000D+01 0.000000000000D+00-0.111758708954D-07 0.880000000000D+02
    0.432018000000D+06 0.400000000000D+01
";

fn session(content: String) -> NavReader<Cursor<Vec<u8>>> {
    NavReader::new(Cursor::new(content.into_bytes()), "memory.21n").unwrap()
}

#[test]
fn two_messages() {
    let content = format!("{}{}{}", HEADER, PRN3, PRN3.replacen(" 3 21", " 7 21", 1));
    let nodes = session(content).read_nodes().unwrap();
    assert_eq!(nodes.len(), 18);
    assert_eq!(nodes.prns().collect::<Vec<_>>(), vec![3, 7]);

    let nav = NavFile::from_nodes(nodes).unwrap();
    let svs: Vec<_> = nav.sv_iter().map(|sv| sv.prn).collect();
    assert_eq!(svs, vec![3, 7]);
    assert_eq!(nav.messages[0].e, 0.141616617236E-01);
    assert!(!nav.has_iono_alpha());
    assert!(!nav.has_leap_seconds());
}

#[test]
fn missing_last_orbit_line() {
    let block: Vec<&str> = PRN3.lines().take(7).collect();
    let content = format!("{}{}\n", HEADER, block.join("\n"));
    let err = session(content).read_nodes().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Eof);
    assert!(matches!(
        err,
        Error::UnexpectedEof {
            state: State::BroadcastOrbit7,
            ..
        }
    ));
    assert_eq!(
        err.to_string(),
        "memory.21n:9: unexpected end of file while in state BroadcastOrbit7"
    );
}

#[test]
fn invalid_literal() {
    let content = format!(
        "{}{}",
        HEADER,
        PRN3.replacen(" 0.141616617236D-01", " 123456789012345678", 1)
    );
    let err = session(content).read_nodes().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::FieldSyntax);
    assert_eq!(
        err.to_string(),
        "memory.21n:5: BROADCAST ORBIT - 2: e: invalid numeric literal \"123456789012345678\""
    );
}

#[test]
fn blank_required_field() {
    let content = format!(
        "{}{}",
        HEADER,
        PRN3.replacen(" 0.141616617236D-01", "                   ", 1)
    );
    let err = session(content).read_nodes().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::FieldSyntax);
    assert!(err.to_string().ends_with("e: blank field"));
}

#[test]
fn out_of_range_literal() {
    let content = format!(
        "{}{}",
        HEADER,
        PRN3.replacen(" 0.141616617236D-01", " 0.14161661D+999999", 1)
    );
    let err = session(content).read_nodes().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::FieldRange);
}

#[test]
fn unsupported_revision() {
    let content = format!("{}{}", HEADER.replacen("2.11", "3.04", 1), PRN3);
    let err = session(content).read_nodes().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::FieldRange);
    assert_eq!(
        err.to_string(),
        "memory.21n:1: RINEX VERSION / TYPE: version: numeric value out of range \"3.04\""
    );

    let content = format!("{}{}", HEADER.replacen("N: GPS", "O: GPS", 1), PRN3);
    let err = session(content).read_nodes().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::FieldSyntax);
    assert!(err.to_string().ends_with("file_type: unsupported value \"O\""));
}

#[test]
fn header_only() {
    let err = session(HEADER.to_string()).read_nodes().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Eof);
    assert!(matches!(
        err,
        Error::UnexpectedEof {
            state: State::ExpectHeader,
            ..
        }
    ));
}

#[test]
fn no_header() {
    let nodes = session(PRN3.to_string()).read_nodes().unwrap();
    assert_eq!(nodes.len(), 8);
}

#[test]
fn standalone_parser() {
    let mut parser = NavParser::new("lines");
    for (i, text) in format!("{}{}", HEADER, PRN3).lines().enumerate() {
        let line = Line::new(text, i + 1);
        parser.consume(Input::Line(&line));
    }
    assert_eq!(parser.state(), State::ExpectOrbitOrEof);
    assert!(parser.error().is_none());
    let nodes = parser.finish().unwrap();
    assert_eq!(nodes.len(), 10);
}

#[test]
#[cfg(feature = "serde")]
fn serdes() {
    let nodes = session(format!("{}{}", HEADER, PRN3)).read_nodes().unwrap();
    let nav = NavFile::from_nodes(nodes.clone()).unwrap();

    let content = serde_json::to_string(&nodes).unwrap();
    let parsed: NodeList = serde_json::from_str(&content).unwrap();
    assert_eq!(parsed, nodes);

    let content = serde_json::to_string(&nav).unwrap();
    let parsed: NavFile = serde_json::from_str(&content).unwrap();
    assert_eq!(parsed, nav);
}
