use archsplit_fs::{OutputPaths, variant_path};
use rstest::rstest;
use std::path::{Path, PathBuf};

#[rstest]
#[case("a.cuh", "host", "a_host.cuh")]
#[case("a.cuh", "device", "a_device.cuh")]
#[case("src/include/coll_defs.cuh", "host", "src/include/coll_defs_host.cuh")]
#[case("/abs/dir/kernel.h", "device", "/abs/dir/kernel_device.h")]
// Only the final extension is preserved
#[case("defs.inl.cuh", "host", "defs.inl_host.cuh")]
#[case("Makefile", "host", "Makefile_host")]
#[case(".hidden", "device", ".hidden_device")]
fn test_variant_path(#[case] input: &str, #[case] suffix: &str, #[case] expected: &str) {
    assert_eq!(variant_path(Path::new(input), suffix), PathBuf::from(expected));
}

#[test]
fn test_output_paths_share_directory() {
    let paths = OutputPaths::for_input(Path::new("include/internal/defs.cuh"));
    assert_eq!(paths.host, PathBuf::from("include/internal/defs_host.cuh"));
    assert_eq!(paths.device, PathBuf::from("include/internal/defs_device.cuh"));
    assert_eq!(paths.host.parent(), paths.device.parent());
}
