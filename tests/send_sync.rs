// Take a look at the license at the top of the repository in the LICENSE file.

#[test]
fn test_send_sync() {
    fn is_send<T: Send>() {}
    fn is_sync<T: Sync>() {}

    is_send::<arm_cpuinfo::CpuInfo>();
    is_sync::<arm_cpuinfo::CpuInfo>();
    is_send::<arm_cpuinfo::ClassifyOptions>();
    is_sync::<arm_cpuinfo::ClassifyOptions>();
    is_sync::<&'static arm_cpuinfo::CodeTable>();
}

#[test]
fn test_classify_from_threads() {
    let data = "CPU implementer\t: 0x48\nCPU part\t: 0xd01\nprocessor\t: 0\n";
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(move || arm_cpuinfo::CpuInfo::from_reader(data.as_bytes())))
        .collect();
    for handle in handles {
        let info = handle.join().expect("thread panicked");
        assert_eq!(info.vendor(), "HiSilicon");
        assert_eq!(info.model(), "Kunpeng-920");
    }
}
