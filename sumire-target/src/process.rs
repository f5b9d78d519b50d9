//! プロセス制御機能

use crate::{Result, TraceError};
use nix::sys::signal::Signal;
use std::ffi::CString;
use std::path::Path;

/// 停止イベントの種類
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopReason {
    /// シグナルによる停止（トレース停止を含む）
    Stopped(Signal),
    /// プロセス終了
    Exited(i32),
    /// シグナルによる強制終了
    Signaled(Signal),
    /// その他の停止
    Other,
}

/// デバッグ対象のプロセス
///
/// プロセスIDは構築時に一度だけ束縛され、以後再代入されない。
/// セッション終了時に明示的なデタッチは行わず、子プロセスは停止状態のまま残る。
pub struct Process {
    pid: nix::unistd::Pid,
}

impl Process {
    /// 実行可能ファイルを起動してデバッグ対象プロセスを開始する
    ///
    /// 新しいプロセスをforkし、子プロセス側でPTRACE_TRACEMEを設定してから
    /// 指定された実行可能ファイルをexecvで実行します。
    /// トレースが有効化される前にexecvが呼ばれることはありません。
    /// 親プロセス側はexecv直後のトレース停止まで待機してから返ります。
    pub fn spawn<P: AsRef<Path>>(program: P, args: &[String]) -> Result<Self> {
        use nix::sys::ptrace;
        use nix::sys::wait::{waitpid, WaitStatus};
        use nix::unistd::{execv, fork, ForkResult};

        // プログラムパスをCStringに変換
        let program_path = program
            .as_ref()
            .to_str()
            .ok_or_else(|| TraceError::InvalidPath(program.as_ref().display().to_string()))?;
        let program_cstring = CString::new(program_path)
            .map_err(|_| TraceError::InvalidPath(program_path.to_string()))?;

        // argv[0]はプログラム名自身
        let mut cstring_args = vec![program_cstring.clone()];
        for arg in args {
            cstring_args.push(
                CString::new(arg.as_str())
                    .map_err(|_| TraceError::InvalidArgument(arg.clone()))?,
            );
        }

        // forkしてプロセスを生成
        match unsafe { fork() }.map_err(TraceError::Fork)? {
            ForkResult::Parent { child } => {
                // 親プロセス: 子プロセスが最初のトレース停止に達するまで待機
                let status = waitpid(child, None).map_err(|e| TraceError::Wait {
                    pid: child.as_raw(),
                    source: e,
                })?;

                match status {
                    WaitStatus::Stopped(_, _) => Ok(Self { pid: child }),
                    status => Err(TraceError::UnexpectedStatus(format!("{:?}", status))),
                }
            }
            ForkResult::Child => {
                // 子プロセス: トレースを有効化してからexecvでイメージを置き換える
                // トレースが有効化できなかった場合はexecvに進んではならない
                if let Err(errno) = ptrace::traceme() {
                    eprintln!("Failed to enable tracing: {}", errno);
                    std::process::exit(1);
                }

                // execvは成功すると戻ってこない
                if let Err(errno) = execv(&program_cstring, &cstring_args) {
                    eprintln!("Failed to execute {}: {}", program_path, errno);
                }
                std::process::exit(1);
            }
        }
    }

    /// プロセスIDを取得する
    pub fn pid(&self) -> i32 {
        self.pid.as_raw()
    }

    /// プロセスを実行継続して次の停止イベントを待機する
    ///
    /// レジスタやシグナル配送には手を加えずに実行を再開し、
    /// 次の停止イベント（シグナル、終了など）まで待機します。
    /// 子プロセスが停止または終了するまで戻りません。
    pub fn continue_and_wait(&self) -> Result<StopReason> {
        use nix::sys::ptrace;
        use nix::sys::wait::{waitpid, WaitStatus};

        // プロセスを実行継続
        ptrace::cont(self.pid, None).map_err(|e| TraceError::Resume {
            pid: self.pid.as_raw(),
            source: e,
        })?;

        // 停止イベントを待機
        let status = waitpid(self.pid, None).map_err(|e| TraceError::Wait {
            pid: self.pid.as_raw(),
            source: e,
        })?;

        Ok(match status {
            WaitStatus::Stopped(_, signal) => StopReason::Stopped(signal),
            WaitStatus::Exited(_, code) => StopReason::Exited(code),
            WaitStatus::Signaled(_, signal, _) => StopReason::Signaled(signal),
            _ => StopReason::Other,
        })
    }
}
