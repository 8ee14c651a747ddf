use metfor::{Celsius, HectoPascal};
use optional::{none, some, Optioned};
use potential_intensity::Sounding;
use std::{fs::File, io::Read, path::PathBuf, str::FromStr};

pub fn load_all_test_files() -> [Sounding; 4] {
    let snd1 = load_test_file("tropical.csv");
    let snd2 = load_test_file("oscillating.csv");
    let snd3 = load_test_file("coarse.csv");
    let snd4 = load_test_file("tropical_ascending.csv");

    [snd1, snd2, snd3, snd4]
}

fn load_test_file(fname: &str) -> Sounding {
    let mut test_path = PathBuf::new();
    test_path.push("test_data");
    test_path.push(fname);
    load_test_csv_sounding(&test_path)
}

fn to_optioned(token: Option<&&str>) -> Optioned<f64> {
    match token.and_then(|tok| f64::from_str(tok.trim()).ok()) {
        Some(v) if !v.is_nan() => some(v),
        _ => none(),
    }
}

fn load_test_csv_sounding(location: &PathBuf) -> Sounding {
    let mut f = File::open(location).expect(&format!("Error opening file: {:#?}", location));

    let mut contents = String::new();
    f.read_to_string(&mut contents)
        .expect(&format!("Error reading file: {:#?}", location));

    let lines: Vec<&str> = contents.split('\n').collect();
    let mut line_iter = lines.iter();

    //
    // Parse profile data
    //
    let mut press: Vec<HectoPascal> = Vec::with_capacity(lines.len());
    let mut temp: Vec<Optioned<Celsius>> = Vec::with_capacity(lines.len());
    let mut mw: Vec<Optioned<f64>> = Vec::with_capacity(lines.len());

    for line in line_iter.by_ref() {
        if line.starts_with("### Surface Data ###") {
            break;
        }

        let tokens: Vec<&str> = line.split(',').collect();
        if tokens.len() < 3 {
            continue;
        }

        if let Some(p) = to_optioned(tokens.get(0)).into_option() {
            press.push(HectoPascal(p));
            temp.push(to_optioned(tokens.get(1)).map_t(Celsius));
            mw.push(to_optioned(tokens.get(2)));
        }
    }

    let mut snd = Sounding::new()
        .with_pressure_profile(press)
        .with_temperature_profile(temp)
        .with_mixing_ratio_profile(mw);

    //
    // Surface data
    //
    for line in line_iter {
        if line.starts_with("### Analysis Int Section ###") {
            break;
        }

        let tokens: Vec<&str> = line.split(',').collect();
        let sst = to_optioned(tokens.get(0));
        let mslp = to_optioned(tokens.get(1));

        if sst.is_some() && mslp.is_some() {
            snd = snd
                .with_sst(sst.map_t(Celsius))
                .with_mslp(mslp.map_t(HectoPascal));
        }
    }

    snd
}
