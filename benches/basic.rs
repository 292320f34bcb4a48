// Take a look at the license at the top of the repository in the LICENSE file.

#![feature(test)]

extern crate test;

use arm_cpuinfo::{ClassifyOptions, CpuInfo};

// Eight cores, four Cortex-A55 and four Cortex-A76.
fn big_little_cpuinfo() -> String {
    let mut s = String::new();
    for cpu in 0..8 {
        let part = if cpu < 4 { "0xd05" } else { "0xd0b" };
        s.push_str(&format!(
            "processor\t: {cpu}\n\
             BogoMIPS\t: 48.00\n\
             Features\t: fp asimd evtstrm aes pmull sha1 sha2 crc32 atomics fphp asimdhp\n\
             CPU implementer\t: 0x41\n\
             CPU architecture: 8\n\
             CPU variant\t: 0x1\n\
             CPU part\t: {part}\n\
             CPU revision\t: 0\n\n"
        ));
    }
    s.push_str("Hardware\t: Rockchip RK3588\n");
    s
}

#[bench]
fn bench_new(b: &mut test::Bencher) {
    b.iter(|| {
        CpuInfo::new();
    });
}

#[bench]
fn bench_from_reader(b: &mut test::Bencher) {
    let data = big_little_cpuinfo();

    b.iter(|| {
        CpuInfo::from_reader(data.as_bytes());
    });
}

#[bench]
fn bench_from_reader_unbounded(b: &mut test::Bencher) {
    let data = big_little_cpuinfo();

    b.iter(|| {
        CpuInfo::from_reader_with_options(data.as_bytes(), ClassifyOptions::unbounded());
    });
}

#[bench]
fn bench_get_hardware(b: &mut test::Bencher) {
    let data = big_little_cpuinfo();

    b.iter(|| {
        arm_cpuinfo::get_hardware_from_reader(data.as_bytes());
    });
}
