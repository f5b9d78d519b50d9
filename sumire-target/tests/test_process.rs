//! プロセス制御のテスト

use sumire_target::{Process, StopReason};

#[test]
fn test_spawn_and_continue_to_exit() {
    // spawnはexecv直後のトレース停止を観測してから返る
    let process = Process::spawn("/bin/true", &[]).expect("Failed to spawn /bin/true");

    println!("Spawned /bin/true as pid {}", process.pid());
    assert!(process.pid() > 0);

    // 実行継続するとそのまま正常終了する
    let reason = process
        .continue_and_wait()
        .expect("Failed to continue /bin/true");
    assert_eq!(reason, StopReason::Exited(0));
}

#[test]
fn test_exit_code_is_propagated() {
    let args = vec!["-c".to_string(), "exit 7".to_string()];
    let process = Process::spawn("/bin/sh", &args).expect("Failed to spawn /bin/sh");

    let reason = process
        .continue_and_wait()
        .expect("Failed to continue /bin/sh");
    assert_eq!(reason, StopReason::Exited(7));
}

#[test]
fn test_spawn_nonexistent_program() {
    // execvに失敗した子プロセスはトレース停止に達することなく終了する
    let result = Process::spawn("/nonexistent/program", &[]);
    assert!(result.is_err());
}

#[test]
fn test_continue_after_exit_fails() {
    let process = Process::spawn("/bin/true", &[]).expect("Failed to spawn /bin/true");
    process
        .continue_and_wait()
        .expect("Failed to continue /bin/true");

    // 終了済みプロセスへの実行継続要求は失敗として報告される
    assert!(process.continue_and_wait().is_err());
}
