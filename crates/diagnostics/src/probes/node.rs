//! Cluster-view probes: node-level checks plus the disk, memory, runtime,
//! and operating-system checks that run only when the matching sub-record is
//! present on a node.

use crate::core::{ComponentType, ProbeCategory, ProbeResult, ProbeResultStatus};

crate::define_probe! {
    NetworkPartitionProbe {
        id: "network-partition",
        name: "Network Partition Probe",
        component: ComponentType::Node,
        category: ProbeCategory::FaultTolerance,
        description: "Flags nodes that consider one or more cluster peers partitioned away",
        subject: Node,
        run: |probe, node| {
            let status = if node.network_partitions.is_empty() {
                ProbeResultStatus::Healthy
            } else {
                ProbeResultStatus::Unhealthy
            };

            ProbeResult::new(
                &node.cluster_identifier,
                &node.identifier,
                ComponentType::Node,
                Self::ID,
                Self::NAME,
                status,
            )
            .with_article(probe.knowledge_base.try_get(Self::ID, status))
            .with_data("node.network_partitions", node.network_partitions.join(","))
        }
    }
}

crate::define_probe! {
    AvailableCpuCoresProbe {
        id: "available-cpu-cores",
        name: "Available CPU Cores Probe",
        component: ComponentType::Node,
        category: ProbeCategory::Throughput,
        description: "Flags nodes reporting no schedulable CPU cores",
        subject: Node,
        run: |probe, node| {
            let status = if node.available_cores == 0 {
                ProbeResultStatus::Unhealthy
            } else {
                ProbeResultStatus::Healthy
            };

            ProbeResult::new(
                &node.cluster_identifier,
                &node.identifier,
                ComponentType::Node,
                Self::ID,
                Self::NAME,
                status,
            )
            .with_article(probe.knowledge_base.try_get(Self::ID, status))
            .with_data("node.available_cores", node.available_cores)
        }
    }
}

crate::define_probe! {
    DiskAlarmProbe {
        id: "disk-alarm",
        name: "Disk Alarm Probe",
        component: ComponentType::Disk,
        category: ProbeCategory::FaultTolerance,
        description: "Flags nodes whose free disk space has fallen under the broker's alarm limit",
        subject: Disk,
        run: |probe, disk| {
            let status = if disk.alarm_in_effect {
                ProbeResultStatus::Unhealthy
            } else {
                ProbeResultStatus::Healthy
            };

            ProbeResult::new(
                &disk.node_identifier,
                &disk.node_identifier,
                ComponentType::Disk,
                Self::ID,
                Self::NAME,
                status,
            )
            .with_article(probe.knowledge_base.try_get(Self::ID, status))
            .with_data("disk.alarm_in_effect", disk.alarm_in_effect)
            .with_data("disk.capacity_available", disk.capacity_available)
            .with_data("disk.limit", disk.limit)
        }
    }
}

crate::define_probe! {
    MemoryAlarmProbe {
        id: "memory-alarm",
        name: "Memory Alarm Probe",
        component: ComponentType::Memory,
        category: ProbeCategory::Memory,
        description: "Flags nodes whose memory usage has tripped the broker's high-watermark alarm",
        subject: Memory,
        run: |probe, memory| {
            let status = if memory.alarm_in_effect {
                ProbeResultStatus::Unhealthy
            } else {
                ProbeResultStatus::Healthy
            };

            ProbeResult::new(
                &memory.node_identifier,
                &memory.node_identifier,
                ComponentType::Memory,
                Self::ID,
                Self::NAME,
                status,
            )
            .with_article(probe.knowledge_base.try_get(Self::ID, status))
            .with_data("memory.alarm_in_effect", memory.alarm_in_effect)
            .with_data("memory.used", memory.used)
            .with_data("memory.limit", memory.limit)
        }
    }
}

crate::define_probe! {
    RuntimeProcessLimitProbe {
        id: "runtime-process-limit",
        name: "Runtime Process Limit Probe",
        component: ComponentType::Runtime,
        category: ProbeCategory::Throughput,
        description: "Flags nodes approaching the runtime scheduler's process limit",
        subject: Runtime,
        thresholds: |config| { coefficient: f64 = config.runtime_process_usage_coefficient },
        run: |probe, runtime| {
            let status = if runtime.process_limit == 0 {
                ProbeResultStatus::Inconclusive
            } else if runtime.processes_used as f64
                >= probe.coefficient * runtime.process_limit as f64
            {
                ProbeResultStatus::Unhealthy
            } else {
                ProbeResultStatus::Healthy
            };

            ProbeResult::new(
                &runtime.node_identifier,
                &runtime.node_identifier,
                ComponentType::Runtime,
                Self::ID,
                Self::NAME,
                status,
            )
            .with_article(probe.knowledge_base.try_get(Self::ID, status))
            .with_data("runtime.processes_used", runtime.processes_used)
            .with_data("runtime.process_limit", runtime.process_limit)
            .with_data("coefficient", probe.coefficient)
        }
    }
}

crate::define_probe! {
    FileDescriptorThrottlingProbe {
        id: "file-descriptor-throttling",
        name: "File Descriptor Throttling Probe",
        component: ComponentType::OperatingSystem,
        category: ProbeCategory::Throughput,
        description: "Flags nodes consuming most of their available file descriptors",
        subject: OperatingSystem,
        thresholds: |config| { coefficient: f64 = config.file_descriptor_usage_coefficient },
        run: |probe, os| {
            let usage = os.file_descriptors;
            let status = if usage.available == 0 {
                ProbeResultStatus::Inconclusive
            } else if usage.used as f64 >= probe.coefficient * usage.available as f64 {
                ProbeResultStatus::Unhealthy
            } else {
                ProbeResultStatus::Healthy
            };

            ProbeResult::new(
                &os.node_identifier,
                &os.node_identifier,
                ComponentType::OperatingSystem,
                Self::ID,
                Self::NAME,
                status,
            )
            .with_article(probe.knowledge_base.try_get(Self::ID, status))
            .with_data("os.file_descriptors.used", usage.used)
            .with_data("os.file_descriptors.available", usage.available)
            .with_data("coefficient", probe.coefficient)
        }
    }
}

crate::define_probe! {
    SocketDescriptorThrottlingProbe {
        id: "socket-descriptor-throttling",
        name: "Socket Descriptor Throttling Probe",
        component: ComponentType::OperatingSystem,
        category: ProbeCategory::Throughput,
        description: "Flags nodes consuming most of their available socket descriptors",
        subject: OperatingSystem,
        thresholds: |config| { coefficient: f64 = config.socket_descriptor_usage_coefficient },
        run: |probe, os| {
            let usage = os.socket_descriptors;
            let status = if usage.available == 0 {
                ProbeResultStatus::Inconclusive
            } else if usage.used as f64 >= probe.coefficient * usage.available as f64 {
                ProbeResultStatus::Unhealthy
            } else {
                ProbeResultStatus::Healthy
            };

            ProbeResult::new(
                &os.node_identifier,
                &os.node_identifier,
                ComponentType::OperatingSystem,
                Self::ID,
                Self::NAME,
                status,
            )
            .with_article(probe.knowledge_base.try_get(Self::ID, status))
            .with_data("os.socket_descriptors.used", usage.used)
            .with_data("os.socket_descriptors.available", usage.available)
            .with_data("coefficient", probe.coefficient)
        }
    }
}
