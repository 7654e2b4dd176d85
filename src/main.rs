use std::io::stdout;

use unispline::configuration::spline_set_from_reader;
use unispline::spline::family::SplineType;
use unispline::spline::splineset::SplineSet;

// Akima's test data (Journal of the ACM, Vol. 17, No. 4, October 1970),
// with a duplicated node at x = 5 encoding a jump.
const XS: [f64; 12] = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
const YS: [f64; 12] = [
    10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 10.5, 15.0, 50.0, 60.0, 85.0,
];

fn main() {
    if let Some(config_path) = std::env::args().nth(1) {
        let set = spline_set_from_reader(config_path).unwrap();
        set.info(&mut stdout()).unwrap();
        set.dump_table(&mut stdout(), 100).unwrap();
        return;
    }

    let types = [
        SplineType::Constant,
        SplineType::Linear,
        SplineType::Akima,
        SplineType::Bessel,
        SplineType::Pchip,
        SplineType::Cubic,
        SplineType::Quintic,
    ];
    let names: Vec<&str> = types.iter().map(|t| t.name()).collect();
    let yss: Vec<Vec<f64>> = types.iter().map(|_| YS.to_vec()).collect();

    let mut set = SplineSet::new();
    set.build(&names, &types, &XS, &yss).unwrap();
    set.info(&mut stdout()).unwrap();
    set.dump_table(&mut stdout(), 100).unwrap();
}
