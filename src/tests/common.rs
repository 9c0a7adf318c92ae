// src/tests/common.rs

//! Sample bugreport and logcat text shared among tests.

#![allow(non_upper_case_globals)]

/// turn a sample block into the owned lines a `SectionParser` receives
pub fn block_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(String::from)
        .collect()
}

/// the five-line `MEMORY INFO` block
pub const MEMINFO_BLOCK: &str = "\
MemTotal:         353332 kB
MemFree:           65420 kB
Buffers:           20800 kB
Cached:            86204 kB
SwapCached:            0 kB
";

/// a `PROCRANK` block with one data row and the usual trailer noise
pub const PROCRANK_BLOCK: &str = "\
  PID      Vss      Rss      Pss      Uss  cmdline
  178   87136K   81684K   52829K   50012K  system_server
                          ------   ------  ------
                          59298K   54072K  TOTAL
";

/// a `SYSTEM PROPERTIES` block
pub const SYSPROPS_BLOCK: &str = "\
[dalvik.vm.dexopt-flags]: [m=y]
[dalvik.vm.heapgrowthlimit]: [48m]
[dalvik.vm.heapsize]: [256m]
[gsm.version.ril-impl]: []
";

/// an ANR event as `threadtime` logcat lines from `ActivityManager`
pub const ANR_LOGCAT: &str = "\
04-25 17:17:08.445   312   366 E ActivityManager: ANR in com.android.browser (com.android.browser/.BrowserActivity)
04-25 17:17:08.445   312   366 E ActivityManager: Reason: keyDispatchingTimedOut
04-25 17:17:08.445   312   366 E ActivityManager: Load: 4.36 / 4.46 / 4.29
04-25 17:17:08.445   312   366 E ActivityManager: CPU usage from 15ms to 21665ms later:
04-25 17:17:08.445   312   366 E ActivityManager:   100% TOTAL: 21% user + 11% kernel + 6.9% iowait
";

/// a Java crash as `time` format logcat lines from `AndroidRuntime`
pub const JAVA_CRASH_LOGCAT: &str = "\
04-25 09:55:47.799  E/AndroidRuntime( 3064): FATAL EXCEPTION: main
04-25 09:55:47.799  E/AndroidRuntime( 3064): java.lang.Exception: hello world
04-25 09:55:47.799  E/AndroidRuntime( 3064):     at android.app.ActivityThread.main(ActivityThread.java:3691)
04-25 09:55:47.799  E/AndroidRuntime( 3064):     at dalvik.system.NativeStart.main(Native Method)
";

/// a native crash as `threadtime` logcat lines from `DEBUG`
pub const NATIVE_CRASH_LOGCAT: &str = "\
04-25 18:40:21.369    85    85 I DEBUG   : *** *** *** *** *** *** *** *** *** *** *** *** *** *** *** ***
04-25 18:40:21.369    85    85 I DEBUG   : Build fingerprint: 'google/passion/passion:2.3.3/GRI40/102588:user/release-keys'
04-25 18:40:21.369    85    85 I DEBUG   : pid: 4135, tid: 4135  >>> com.android.browser <<<
04-25 18:40:21.369    85    85 I DEBUG   : signal 11 (SIGSEGV), code 1 (SEGV_MAPERR), fault addr 00000000
";

/// a full small bugreport exercising every registered section, a section
/// nobody asked for, and preamble text before the first boundary
pub const BUGREPORT_FULL: &str = "\
========================================================
== dumpstate: 2011-04-25 20:45:10
========================================================
------ MEMORY INFO (/proc/meminfo) ------
MemTotal:         353332 kB
MemFree:           65420 kB
Buffers:           20800 kB
Cached:            86204 kB
SwapCached:            0 kB
------ CPU INFO (top -n 1 -d 1 -m 30 -t) ------
User 20%, System 3%, IOW 0%, IRQ 0%
------ PROCRANK (procrank) ------
  PID      Vss      Rss      Pss      Uss  cmdline
  178   87136K   81684K   52829K   50012K  system_server
  273   64528K   62688K   33542K   30988K  com.android.launcher
------ SYSTEM PROPERTIES ------
[dalvik.vm.heapgrowthlimit]: [48m]
[dalvik.vm.heapsize]: [256m]
------ SYSTEM LOG (logcat -v time -d *:v) ------
04-25 09:55:47.799  E/AndroidRuntime( 3064): FATAL EXCEPTION: main
04-25 09:55:47.799  E/AndroidRuntime( 3064): java.lang.Exception: hello world
04-25 09:55:47.799  E/AndroidRuntime( 3064):     at android.app.ActivityThread.main(ActivityThread.java:3691)
04-25 17:17:08.445  E/ActivityManager(  312): ANR in com.android.browser
04-25 17:17:08.445  E/ActivityManager(  312): Reason: keyDispatchingTimedOut
04-25 17:17:08.445  E/ActivityManager(  312):   100% TOTAL: 21% user + 11% kernel + 6.9% iowait
04-25 18:40:21.369  I/DEBUG   (   85): *** *** *** *** *** *** *** *** *** *** *** *** *** *** *** ***
04-25 18:40:21.369  I/DEBUG   (   85): Build fingerprint: 'google/passion/passion:2.3.3/GRI40/102588:user/release-keys'
04-25 18:40:21.369  I/DEBUG   (   85): pid: 4135, tid: 4135  >>> com.android.browser <<<
------ EVENT LOG TAGS (/etc/event-log-tags) ------
42 answer (to life the universe etc|3)
";
