// SPDX-License-Identifier: MIT

/// Human readable size in binary units, exact below 1 KiB.
pub fn pretty_bytes(n: u64) -> String {
    const UNITS: [&str; 5] = ["KiB", "MiB", "GiB", "TiB", "PiB"];
    if n < 1024 {
        return format!("{n} B");
    }
    let mut val = n as f64 / 1024.0;
    let mut unit = UNITS[0];
    for next in &UNITS[1..] {
        if val < 1024.0 {
            break;
        }
        val /= 1024.0;
        unit = next;
    }
    format!("{val:.1} {unit}")
}

/// `"21"` for a single sector, `"21..=23"` for a run.
pub fn sector_span(first: u32, count: u32) -> String {
    match count {
        0 | 1 => first.to_string(),
        n => format!("{first}..={}", first + (n - 1)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pretty_bytes() {
        assert_eq!(pretty_bytes(0), "0 B");
        assert_eq!(pretty_bytes(1023), "1023 B");
        assert_eq!(pretty_bytes(24 * 2048), "48.0 KiB");
        assert_eq!(pretty_bytes(3 * 1024 * 1024 / 2), "1.5 MiB");
        assert_eq!(pretty_bytes(4 * 1024 * 1024 * 1024), "4.0 GiB");
    }

    #[test]
    fn test_sector_span() {
        assert_eq!(sector_span(16, 1), "16");
        assert_eq!(sector_span(21, 3), "21..=23");
    }
}
