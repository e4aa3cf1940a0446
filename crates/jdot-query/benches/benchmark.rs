use jdot_query::{Cursor, Document};

fn main() {
    divan::main();
}

fn forecasts(days: usize) -> String {
    let entries = (0..days)
        .map(|day| {
            format!(
                r#"{{"Date": "day-{day}", "Sun": {{"Rise": "06:00"}}, "Temperature": [{{"Minimum": {{"Value": {day}, "Unit": "C"}}, "Maximum": {{"Value": {max}, "Unit": "C"}}}}], "Day": [{{"Wind": [{{"Speed": {{"Value": 3.5}}}}]}}]}}"#,
                max = day + 10
            )
        })
        .collect::<Vec<_>>()
        .join(",");
    format!("[{}]", entries)
}

#[divan::bench(args = [10, 1_000])]
fn parse_forecasts(bencher: divan::Bencher, days: usize) {
    let json = forecasts(days);
    bencher.bench(|| json.parse::<Document>().unwrap());
}

#[divan::bench(name = "resolve_array_wrapped_path")]
fn resolve_array_wrapped_path(bencher: divan::Bencher) {
    let document: Document = forecasts(10).parse().unwrap();
    bencher.bench(|| document.float_value(divan::black_box("Day.Wind.Speed.Value"), 5).unwrap());
}

#[divan::bench(args = [10, 1_000])]
fn iterate_every_entry(bencher: divan::Bencher, days: usize) {
    let document: Document = forecasts(days).parse().unwrap();
    bencher.bench(|| {
        let mut cursor = Cursor::new();
        let mut total = 0.0;
        while let Some(value) = cursor.next_float(&document, "Temperature.Maximum.Value").unwrap() {
            total += value;
        }
        total
    });
}
