//! Darwin BSD syscall numbers, from xnu's `bsd/kern/syscalls.master`.
//!
//! Only the numbers referenced by the definition tables are listed; unknown
//! numbers degrade to raw rendering at trace time, they are never an error.

#![allow(non_upper_case_globals)]

pub const SYS_exit: u64 = 1;
pub const SYS_fork: u64 = 2;
pub const SYS_read: u64 = 3;
pub const SYS_write: u64 = 4;
pub const SYS_open: u64 = 5;
pub const SYS_close: u64 = 6;
pub const SYS_wait4: u64 = 7;
pub const SYS_link: u64 = 9;
pub const SYS_unlink: u64 = 10;
pub const SYS_chdir: u64 = 12;
pub const SYS_fchdir: u64 = 13;
pub const SYS_mknod: u64 = 14;
pub const SYS_chmod: u64 = 15;
pub const SYS_chown: u64 = 16;
pub const SYS_getfsstat: u64 = 18;
pub const SYS_getpid: u64 = 20;
pub const SYS_setuid: u64 = 23;
pub const SYS_getuid: u64 = 24;
pub const SYS_geteuid: u64 = 25;
pub const SYS_ptrace: u64 = 26;
pub const SYS_recvmsg: u64 = 27;
pub const SYS_sendmsg: u64 = 28;
pub const SYS_recvfrom: u64 = 29;
pub const SYS_accept: u64 = 30;
pub const SYS_getpeername: u64 = 31;
pub const SYS_getsockname: u64 = 32;
pub const SYS_access: u64 = 33;
pub const SYS_chflags: u64 = 34;
pub const SYS_fchflags: u64 = 35;
pub const SYS_sync: u64 = 36;
pub const SYS_kill: u64 = 37;
pub const SYS_getppid: u64 = 39;
pub const SYS_dup: u64 = 41;
pub const SYS_pipe: u64 = 42;
pub const SYS_getegid: u64 = 43;
pub const SYS_sigaction: u64 = 46;
pub const SYS_getgid: u64 = 47;
pub const SYS_sigprocmask: u64 = 48;
pub const SYS_getlogin: u64 = 49;
pub const SYS_acct: u64 = 51;
pub const SYS_sigpending: u64 = 52;
pub const SYS_sigaltstack: u64 = 53;
pub const SYS_ioctl: u64 = 54;
pub const SYS_reboot: u64 = 55;
pub const SYS_revoke: u64 = 56;
pub const SYS_symlink: u64 = 57;
pub const SYS_readlink: u64 = 58;
pub const SYS_execve: u64 = 59;
pub const SYS_umask: u64 = 60;
pub const SYS_chroot: u64 = 61;
pub const SYS_msync: u64 = 65;
pub const SYS_vfork: u64 = 66;
pub const SYS_munmap: u64 = 73;
pub const SYS_mprotect: u64 = 74;
pub const SYS_madvise: u64 = 75;
pub const SYS_mincore: u64 = 78;
pub const SYS_getgroups: u64 = 79;
pub const SYS_setgroups: u64 = 80;
pub const SYS_getpgrp: u64 = 81;
pub const SYS_setpgid: u64 = 82;
pub const SYS_setitimer: u64 = 83;
pub const SYS_getitimer: u64 = 86;
pub const SYS_getdtablesize: u64 = 89;
pub const SYS_dup2: u64 = 90;
pub const SYS_fcntl: u64 = 92;
pub const SYS_select: u64 = 93;
pub const SYS_fsync: u64 = 95;
pub const SYS_setpriority: u64 = 96;
pub const SYS_socket: u64 = 97;
pub const SYS_connect: u64 = 98;
pub const SYS_getpriority: u64 = 100;
pub const SYS_bind: u64 = 104;
pub const SYS_setsockopt: u64 = 105;
pub const SYS_listen: u64 = 106;
pub const SYS_sigsuspend: u64 = 111;
pub const SYS_gettimeofday: u64 = 116;
pub const SYS_getrusage: u64 = 117;
pub const SYS_getsockopt: u64 = 118;
pub const SYS_readv: u64 = 120;
pub const SYS_writev: u64 = 121;
pub const SYS_settimeofday: u64 = 122;
pub const SYS_fchown: u64 = 123;
pub const SYS_fchmod: u64 = 124;
pub const SYS_setreuid: u64 = 126;
pub const SYS_setregid: u64 = 127;
pub const SYS_rename: u64 = 128;
pub const SYS_flock: u64 = 131;
pub const SYS_mkfifo: u64 = 132;
pub const SYS_sendto: u64 = 133;
pub const SYS_shutdown: u64 = 134;
pub const SYS_socketpair: u64 = 135;
pub const SYS_mkdir: u64 = 136;
pub const SYS_rmdir: u64 = 137;
pub const SYS_utimes: u64 = 138;
pub const SYS_futimes: u64 = 139;
pub const SYS_adjtime: u64 = 140;
pub const SYS_gethostuuid: u64 = 142;
pub const SYS_setsid: u64 = 147;
pub const SYS_getpgid: u64 = 151;
pub const SYS_pread: u64 = 153;
pub const SYS_pwrite: u64 = 154;
pub const SYS_statfs: u64 = 157;
pub const SYS_fstatfs: u64 = 158;
pub const SYS_unmount: u64 = 159;
pub const SYS_quotactl: u64 = 165;
pub const SYS_mount: u64 = 167;
pub const SYS_csops: u64 = 169;
pub const SYS_csops_audittoken: u64 = 170;
pub const SYS_waitid: u64 = 173;
pub const SYS_kdebug_trace: u64 = 180;
pub const SYS_setgid: u64 = 181;
pub const SYS_setegid: u64 = 182;
pub const SYS_seteuid: u64 = 183;
pub const SYS_sigreturn: u64 = 184;
pub const SYS_stat: u64 = 188;
pub const SYS_fstat: u64 = 189;
pub const SYS_lstat: u64 = 190;
pub const SYS_pathconf: u64 = 191;
pub const SYS_fpathconf: u64 = 192;
pub const SYS_getrlimit: u64 = 194;
pub const SYS_setrlimit: u64 = 195;
pub const SYS_getdirentries: u64 = 196;
pub const SYS_mmap: u64 = 197;
pub const SYS_lseek: u64 = 199;
pub const SYS_truncate: u64 = 200;
pub const SYS_ftruncate: u64 = 201;
pub const SYS_sysctl: u64 = 202;
pub const SYS_mlock: u64 = 203;
pub const SYS_munlock: u64 = 204;
pub const SYS_poll: u64 = 230;
pub const SYS_getxattr: u64 = 234;
pub const SYS_setxattr: u64 = 236;
pub const SYS_listxattr: u64 = 240;
pub const SYS_posix_spawn: u64 = 244;
pub const SYS_minherit: u64 = 250;
pub const SYS_shm_open: u64 = 266;
pub const SYS_shm_unlink: u64 = 267;
pub const SYS_sem_open: u64 = 268;
pub const SYS_sem_close: u64 = 269;
pub const SYS_sem_unlink: u64 = 270;
pub const SYS_sem_wait: u64 = 271;
pub const SYS_sem_trywait: u64 = 272;
pub const SYS_sem_post: u64 = 273;
pub const SYS_sysctlbyname: u64 = 274;
pub const SYS_psynch_mutexwait: u64 = 301;
pub const SYS_psynch_mutexdrop: u64 = 302;
pub const SYS_psynch_cvbroad: u64 = 303;
pub const SYS_psynch_cvsignal: u64 = 304;
pub const SYS_psynch_cvwait: u64 = 305;
pub const SYS_mlockall: u64 = 324;
pub const SYS_munlockall: u64 = 325;
pub const SYS_issetugid: u64 = 327;
pub const SYS_pthread_kill: u64 = 328;
pub const SYS_pthread_sigmask: u64 = 329;
pub const SYS_stat64: u64 = 338;
pub const SYS_fstat64: u64 = 339;
pub const SYS_lstat64: u64 = 340;
pub const SYS_getdirentries64: u64 = 344;
pub const SYS_statfs64: u64 = 345;
pub const SYS_fstatfs64: u64 = 346;
pub const SYS_bsdthread_create: u64 = 360;
pub const SYS_bsdthread_terminate: u64 = 361;
pub const SYS_kqueue: u64 = 362;
pub const SYS_kevent: u64 = 363;
pub const SYS_bsdthread_register: u64 = 366;
pub const SYS_workq_open: u64 = 367;
pub const SYS_workq_kernreturn: u64 = 368;
pub const SYS_thread_selfid: u64 = 372;
pub const SYS_kevent_qos: u64 = 374;
pub const SYS_mac_syscall: u64 = 381;
pub const SYS_read_nocancel: u64 = 396;
pub const SYS_write_nocancel: u64 = 397;
pub const SYS_open_nocancel: u64 = 398;
pub const SYS_close_nocancel: u64 = 399;
pub const SYS_openat: u64 = 463;
pub const SYS_renameat: u64 = 465;
pub const SYS_faccessat: u64 = 466;
pub const SYS_fchmodat: u64 = 467;
pub const SYS_fchownat: u64 = 468;
pub const SYS_fstatat64: u64 = 470;
pub const SYS_linkat: u64 = 471;
pub const SYS_unlinkat: u64 = 472;
pub const SYS_readlinkat: u64 = 473;
pub const SYS_symlinkat: u64 = 474;
pub const SYS_mkdirat: u64 = 475;
pub const SYS_getentropy: u64 = 500;
pub const SYS_ulock_wait: u64 = 515;
pub const SYS_ulock_wake: u64 = 516;
