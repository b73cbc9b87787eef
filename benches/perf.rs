use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use ll_defense::defense::season_defense;
use ll_defense::results::{extract_raw_scores, season_results};
use ll_defense::score::parse_score_token;

fn bench_score_token(c: &mut Criterion) {
    c.bench_function("score_token_parse", |b| {
        b.iter(|| {
            let rec = parse_score_token(black_box("9(5)-4(4)")).unwrap();
            black_box(rec.my_score);
        })
    });
}

fn bench_page_extract(c: &mut Criterion) {
    c.bench_function("results_page_extract", |b| {
        b.iter(|| {
            let raw = extract_raw_scores(black_box(RESULTS_HTML));
            black_box(raw.len());
        })
    });
}

fn bench_season_defense(c: &mut Criterion) {
    let results = season_results(&extract_raw_scores(RESULTS_HTML)).expect("bench page parses");
    let matches = results.get(&60).expect("bench season present");
    c.bench_function("season_defense", |b| {
        b.iter(|| {
            let (stat, swings) = season_defense(black_box(matches));
            black_box((stat.net, swings.len()));
        })
    });
}

criterion_group!(
    benches,
    bench_score_token,
    bench_page_extract,
    bench_season_defense
);
criterion_main!(benches);

const RESULTS_HTML: &str = r#"<!DOCTYPE html>
<html>
<body>
<table class="std">
<tr>
  <td><a href="/match.php?60&1">LL60 MD1</a></td>
  <td><a href="/match.php?id=60101">9(5)-4(4)</a></td>
</tr>
<tr>
  <td><a href="/match.php?60&2">LL60 MD2</a></td>
  <td><a href="/match.php?id=60102">6(3)-5(4)</a></td>
</tr>
<tr>
  <td><a href="/match.php?60&3">LL60 MD3</a></td>
  <td><a href="/match.php?id=60103">5(4)-6(4)</a></td>
</tr>
<tr>
  <td><a href="/match.php?60&4">LL60 MD4</a></td>
  <td><a href="/match.php?id=60104">0(F)-6(5)</a></td>
</tr>
<tr>
  <td><a href="/match.php?60&5">LL60 MD5</a></td>
  <td><a href="/match.php?id=60105">7(5)-5(3)</a></td>
</tr>
<tr>
  <td><a href="/match.php?60&6">LL60 MD6</a></td>
  <td><a href="/match.php?id=60106">4(3)-6(5)</a></td>
</tr>
</table>
</body>
</html>
"#;
